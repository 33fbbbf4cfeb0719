//! Deep merge of plain objects.

use log::warn;

use deepval_foundation::{Kind, Limits, Value, is_dangerous_key};

/// Merges `sources` into a copy of `target`, left to right.
///
/// Neither `target` nor any source is modified. Sources that are not plain
/// objects are skipped. Dangerous keys in a source are skipped. When both
/// the accumulated value and the source value under a key are plain
/// objects they are merged recursively; otherwise the source value replaces
/// the accumulated one wholesale, so arrays are overwritten rather than
/// combined. Later sources win.
///
/// Recursion stops past [`Limits::DEFAULT`]'s `max_merge_depth` (50): the
/// subtree at that depth is kept as it was in the accumulator and the
/// deeper source contributions are dropped without an error.
#[must_use]
pub fn merge_deep(target: &Value, sources: &[Value]) -> Value {
    merge_deep_with(&Limits::DEFAULT, target, sources)
}

/// [`merge_deep`] with an explicit merge ceiling.
#[must_use]
pub fn merge_deep_with(limits: &Limits, target: &Value, sources: &[Value]) -> Value {
    merge_level(limits, target, sources, 0)
}

fn merge_level(limits: &Limits, target: &Value, sources: &[Value], depth: usize) -> Value {
    if depth > limits.max_merge_depth {
        warn!(
            "merge_deep: depth {depth} exceeds maximum {}, keeping target subtree",
            limits.max_merge_depth
        );
        return target.clone();
    }

    let mut result = target.own_entries();

    for source in sources {
        if !is_mergeable(source.kind()) {
            continue;
        }
        for (key, incoming) in source.own_entries() {
            if is_dangerous_key(&key) {
                warn!("merge_deep: skipping dangerous key {key:?}");
                continue;
            }
            let incoming_mergeable = is_mergeable(incoming.kind());
            let merged = match result.get(&key) {
                Some(existing) if incoming_mergeable && is_mergeable(existing.kind()) => {
                    merge_level(limits, existing, std::slice::from_ref(&incoming), depth + 1)
                }
                _ => incoming,
            };
            result.insert(key, merged);
        }
    }

    Value::from_props(result)
}

/// Only plain objects merge key by key. Every other kind is taken whole.
const fn is_mergeable(kind: Kind) -> bool {
    match kind {
        Kind::PlainObject => true,
        Kind::Primitive
        | Kind::Date
        | Kind::RegExp
        | Kind::Map
        | Kind::Set
        | Kind::Array
        | Kind::OtherObject => false,
    }
}
