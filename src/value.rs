/// A public key, as an opaque byte string. The compiler never parses or
/// validates key material — it only pushes it, or leaves a witness slot
/// for it to be supplied at spend time.
pub type Key = Vec<u8>;

/// A hash digest, as an opaque byte string. Same treatment as [`Key`]:
/// the compiler never inspects the bytes, it only places them.
pub type Hash = Vec<u8>;
