use super::Category;
use crate::Count;
use crate::N_CATEGORIES;
use std::ops::AddAssign;
use std::ops::Index;
use std::ops::IndexMut;

/// A total mapping from every Category to a value.
///
/// Backed by a fixed array indexed by `Category::index`, so lookups never
/// miss and never allocate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tally<T>([T; N_CATEGORIES]);

impl<T> Tally<T> {
    /// Build a table by evaluating `f` once per category.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Category) -> T,
    {
        Self(std::array::from_fn(|i| f(Category::from(i))))
    }
    /// (category, value) pairs in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::all().into_iter().zip(self.0.iter())
    }
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T> Tally<T>
where
    T: AddAssign + Copy,
{
    /// Element-wise accumulation of another table into this one.
    pub fn absorb(&mut self, other: &Self) {
        for (mine, theirs) in self.0.iter_mut().zip(other.0.iter()) {
            mine.add_assign(*theirs);
        }
    }
}

impl Tally<Count> {
    /// Sum over all categories.
    pub fn sum(&self) -> Count {
        self.0.iter().sum()
    }
}

impl Tally<Tally<Count>> {
    /// Element-wise accumulation of a nested table.
    pub fn absorb_nested(&mut self, other: &Self) {
        for (mine, theirs) in self.0.iter_mut().zip(other.0.iter()) {
            mine.absorb(theirs);
        }
    }
}

impl<T> Index<Category> for Tally<T> {
    type Output = T;
    fn index(&self, category: Category) -> &Self::Output {
        &self.0[category.index()]
    }
}

impl<T> IndexMut<Category> for Tally<T> {
    fn index_mut(&mut self, category: Category) -> &mut Self::Output {
        &mut self.0[category.index()]
    }
}

/// Serialized as a map keyed by category name, in category order.
impl<T> serde::Serialize for Tally<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.iter())
    }
}
