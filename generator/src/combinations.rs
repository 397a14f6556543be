//! Lazy combination enumeration over index positions.
//!
//! Combinations are produced as sorted index vectors, in lexicographic order,
//! so the relative order of the source items is always preserved. Callers map
//! the indices back onto their own slice with [`select`].

/// Iterator over every `r`-element combination of `0..n`.
///
/// `r == 0` and `r > n` yield nothing.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, r: usize) -> Self {
        Self {
            n,
            indices: (0..r).collect(),
            started: false,
            done: r == 0 || r > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        let r = self.indices.len();
        // Rightmost position that has not yet reached its final value n - r + i.
        let pivot = (0..r).rev().find(|&i| self.indices[i] != i + self.n - r);
        let Some(i) = pivot else {
            self.done = true;
            return None;
        };

        self.indices[i] += 1;
        for j in i + 1..r {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

/// Iterator over every non-empty combination of `0..n`, shortest first.
#[derive(Debug, Clone)]
pub struct NonEmptySubsets {
    n: usize,
    r: usize,
    current: Combinations,
}

impl NonEmptySubsets {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            r: 1,
            current: Combinations::new(n, 1),
        }
    }
}

impl Iterator for NonEmptySubsets {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        loop {
            if let Some(combo) = self.current.next() {
                return Some(combo);
            }
            if self.r >= self.n {
                return None;
            }
            self.r += 1;
            self.current = Combinations::new(self.n, self.r);
        }
    }
}

/// Maps sorted `indices` onto `items`.
pub fn select<'a, T>(items: &'a [T], indices: &[usize]) -> Vec<&'a T> {
    indices.iter().map(|&i| &items[i]).collect()
}

/// Every non-empty combination of `items`, shortest first, lexicographic
/// within each length.
pub fn non_empty_combinations<T>(items: &[T]) -> impl Iterator<Item = Vec<&T>> + '_ {
    NonEmptySubsets::new(items.len()).map(move |indices| select(items, &indices))
}

/// C(n, r). Zero when `r > n`; `None` when an intermediate product overflows `u64`.
pub fn binomial(n: u64, r: u64) -> Option<u64> {
    if r > n {
        return Some(0);
    }
    let r = r.min(n - r);
    // Each partial product is itself a binomial coefficient, so the division is exact.
    (0..r).try_fold(1u64, |acc, k| Some(acc.checked_mul(n - k)? / (k + 1)))
}

/// Number of non-empty subsets of an `n`-element set: 2^n - 1.
/// `None` once the count no longer fits in `u64`.
pub fn non_empty_subset_count(n: u32) -> Option<u64> {
    let n = u64::from(n);
    (1..=n).try_fold(0u64, |total, r| total.checked_add(binomial(n, r)?))
}
