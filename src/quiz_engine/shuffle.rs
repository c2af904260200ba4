use rand::Rng;

/// Return a uniformly random permutation of `items`, leaving the input
/// untouched.
///
/// Fisher–Yates: walk from the back, swapping each position with a uniform
/// pick from the prefix up to and including itself.  Given a uniform `rng`,
/// all `n!` orderings are equally likely.  The random source is injected so
/// callers (and tests) can pin a seed.
pub fn shuffled<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}
