use crate::Arbitrary;
use crate::N_CATEGORIES;
use crate::category::Category;

/// The set of categories offered to a unit group at decision time.
///
/// A bitmask over category indices: inserting is idempotent, which is what
/// collapses several neighbouring regions with identical feature vectors into
/// a single move bucket.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Options(u32);

impl Options {
    /// Idle is always possible, so every decision starts from it.
    pub fn idle() -> Self {
        Self::from(Category::Idle)
    }
    /// Adds a category; returns false if it was already offered.
    pub fn insert(&mut self, category: Category) -> bool {
        let fresh = !self.contains(category);
        self.0 |= Self::bit(category);
        fresh
    }
    pub fn contains(&self, category: Category) -> bool {
        self.0 & Self::bit(category) != 0
    }
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    /// Members in category order.
    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        Category::all()
            .into_iter()
            .filter(move |category| self.contains(*category))
    }
    fn bit(category: Category) -> u32 {
        1 << category.index()
    }
}

impl From<Category> for Options {
    fn from(category: Category) -> Self {
        Self(Self::bit(category))
    }
}

impl FromIterator<Category> for Options {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |mut options, category| {
            options.insert(category);
            options
        })
    }
}

impl std::fmt::Display for Options {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let members = self.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "{{{}}}", members.join(", "))
    }
}

impl Arbitrary for Options {
    fn random() -> Self {
        let mask = rand::random::<u32>() & ((1 << N_CATEGORIES) - 1);
        Self(mask) + Category::Idle
    }
}

impl std::ops::Add<Category> for Options {
    type Output = Self;
    fn add(mut self, category: Category) -> Self::Output {
        self.insert(category);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Features;

    #[test]
    fn insert_is_idempotent() {
        let mut options = Options::idle();
        let wander = Category::Move(Features::from(0b1010));
        assert!(options.insert(wander));
        assert!(!options.insert(wander));
        assert!(!options.insert(Category::Idle));
        assert_eq!(options.len(), 2);
    }

    #[test]
    fn iterates_in_category_order() {
        let options = [
            Category::Move(Features::from(0b1111)),
            Category::Attack,
            Category::Move(Features::from(0b0001)),
        ]
        .into_iter()
        .collect::<Options>();
        assert_eq!(
            options.iter().collect::<Vec<_>>(),
            vec![
                Category::Attack,
                Category::Move(Features::from(0b0001)),
                Category::Move(Features::from(0b1111)),
            ]
        );
        assert!(!options.contains(Category::Idle));
    }

    #[test]
    fn displays_members() {
        let options = Options::idle() + Category::Attack;
        assert_eq!(options.to_string(), "{Idle, Attack}");
        assert_eq!(Options::default().to_string(), "{}");
    }

    #[test]
    fn random_sets_always_offer_idle() {
        for _ in 0..64 {
            assert!(Options::random().contains(Category::Idle));
        }
    }
}
