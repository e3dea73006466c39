// Name Normalizer - canonical form for comparing organizational names
//
// Branch/town/area names arrive inconsistently cased and spaced from the
// roster and registry sources. Normalization is applied at match time
// only; the mapping tables always store the original strings.

/// Canonicalize a free-text organizational name for comparison.
///
/// Lower-cases, trims, and collapses internal whitespace runs to a
/// single space. No transliteration or punctuation stripping.
/// Pure, total, idempotent.
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
