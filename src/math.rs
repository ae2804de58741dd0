use std::collections::{BTreeMap, BTreeSet};
use std::hash::Hash;

/// Type alias for sets, we use this to hide which type of `HashSet` we are actually using.
pub type Set<S> = fxhash::FxHashSet<S>;
/// Type alias for maps, we use this to hide which type of `HashMap` we are actually using.
pub type Map<K, V> = fxhash::FxHashMap<K, V>;

/// Sets whose iteration order is the order of their elements. The automaton itself is
/// stored in these so that everything derived from it is deterministic.
pub type OrderedSet<S> = BTreeSet<S>;
/// Maps whose iteration order is the order of their keys.
pub type OrderedMap<K, V> = BTreeMap<K, V>;

/// Represents a bijective mapping between `L` and `R`, that is a mapping which associates
/// each `L` with precisely one `R` and vice versa.
pub type Bijection<L, R> = bimap::BiBTreeMap<L, R>;

/// A partition is a different view on a congruence relation, by grouping elements of
/// type `I` into their respective classes under the relation. The position of a class
/// in the partition is its id.
#[derive(Debug, Clone)]
pub struct Partition<I: Hash + Eq>(Vec<BTreeSet<I>>);

impl<I: Hash + Eq> std::ops::Deref for Partition<I> {
    type Target = Vec<BTreeSet<I>>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a, I: Hash + Eq> IntoIterator for &'a Partition<I> {
    type Item = &'a BTreeSet<I>;
    type IntoIter = std::slice::Iter<'a, BTreeSet<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Two partitions are equal if they consist of the same classes, the order of the
/// classes is irrelevant.
impl<I: Hash + Eq> PartialEq for Partition<I> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|o| other.contains(o))
    }
}
impl<I: Hash + Eq> Eq for Partition<I> {}

impl<I: Hash + Eq + Ord> Partition<I> {
    /// Returns the size of the partition, i.e. the number of classes.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Builds a new partition from an iterator that yields iterators
    /// which yield elements of type `I`. Empty classes are skipped.
    pub fn new<X: IntoIterator<Item = I>, Y: IntoIterator<Item = X>>(iter: Y) -> Self {
        Self(
            iter.into_iter()
                .map(|it| it.into_iter().collect::<BTreeSet<_>>())
                .filter(|class| !class.is_empty())
                .collect(),
        )
    }

    /// Tries to find the id of the class containing `q`. If `q` is not in
    /// the partition, `None` is returned.
    pub fn class_of(&self, q: &I) -> Option<usize> {
        self.0.iter().position(|class| class.contains(q))
    }

    /// Returns a map that assigns every element to the id of its class. Prefer this over
    /// repeated calls to [`Partition::class_of`] when many lookups are needed.
    pub fn labelling(&self) -> Map<&I, usize> {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(id, class)| class.iter().map(move |q| (q, id)))
            .collect()
    }

    /// Checks whether `self` is an exact partition of `universe`: every class is
    /// non-empty, no element occurs in two classes and the union of the classes
    /// is `universe`.
    pub fn is_partition_of<'a, U>(&self, universe: U) -> bool
    where
        I: 'a,
        U: IntoIterator<Item = &'a I>,
    {
        let universe: BTreeSet<&I> = universe.into_iter().collect();
        let mut covered = BTreeSet::new();
        for class in &self.0 {
            if class.is_empty() {
                return false;
            }
            for q in class {
                if !covered.insert(q) {
                    return false;
                }
            }
        }
        covered == universe
    }
}

impl<I: Hash + Eq + Ord> From<Vec<BTreeSet<I>>> for Partition<I> {
    fn from(value: Vec<BTreeSet<I>>) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Partition;

    #[test]
    fn partition_equality_ignores_order() {
        let left = Partition::new([vec![0, 1], vec![2]]);
        let right = Partition::new([vec![2], vec![1, 0]]);
        assert_eq!(left, right);
        assert_ne!(left, Partition::new([vec![0], vec![1, 2]]));
        assert_ne!(left, Partition::new([vec![0, 1, 2]]));
    }

    #[test]
    fn partition_lookup() {
        let partition = Partition::new([vec![3, 1], vec![], vec![2]]);
        assert_eq!(partition.size(), 2);
        assert_eq!(partition.class_of(&1), Some(0));
        assert_eq!(partition.class_of(&2), Some(1));
        assert_eq!(partition.class_of(&7), None);

        let labelling = partition.labelling();
        assert_eq!(labelling[&3], 0);
        assert_eq!(labelling[&2], 1);
    }

    #[test]
    fn exact_partition() {
        let partition = Partition::new([vec![0, 1], vec![2]]);
        assert!(partition.is_partition_of(&[0, 1, 2]));
        assert!(!partition.is_partition_of(&[0, 1, 2, 3]));
        assert!(!partition.is_partition_of(&[0, 1]));

        let overlapping = Partition::new([vec![0, 1], vec![1, 2]]);
        assert!(!overlapping.is_partition_of(&[0, 1, 2]));
    }
}
