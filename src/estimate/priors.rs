use super::Estimate;
use crate::Error;
use crate::Probability;
use crate::category::Category;
use crate::category::Tally;

/// P(c selected | c available), for every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Marginal(Tally<Estimate>);

/// P(c2 available | c selected), for every pair, keyed by `c` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Conditional(Tally<Tally<Estimate>>);

/// Both tables, as handed to a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Priors {
    pub marginal: Marginal,
    pub conditional: Conditional,
}

impl Marginal {
    pub fn get(&self, category: Category) -> Estimate {
        self.0[category]
    }
    /// The probability, or UndefinedProbability if the category was never
    /// available.
    pub fn probability(&self, category: Category) -> Result<Probability, Error> {
        self.get(category)
            .value()
            .ok_or_else(|| Error::UndefinedProbability {
                event: format!("P({})", category),
            })
    }
    pub fn iter(&self) -> impl Iterator<Item = (Category, &Estimate)> {
        self.0.iter()
    }
}

impl Conditional {
    pub fn get(&self, selected: Category, available: Category) -> Estimate {
        self.0[selected][available]
    }
    /// The probability, or UndefinedProbability if `selected` was never
    /// selected.
    pub fn probability(
        &self,
        selected: Category,
        available: Category,
    ) -> Result<Probability, Error> {
        self.get(selected, available)
            .value()
            .ok_or_else(|| Error::UndefinedProbability {
                event: format!("P({} available | {} selected)", available, selected),
            })
    }
    /// The row of estimates conditioned on one selected category.
    pub fn given(&self, selected: Category) -> &Tally<Estimate> {
        &self.0[selected]
    }
    pub fn iter(&self) -> impl Iterator<Item = (Category, &Tally<Estimate>)> {
        self.0.iter()
    }
}

impl From<Tally<Estimate>> for Marginal {
    fn from(tally: Tally<Estimate>) -> Self {
        Self(tally)
    }
}

impl From<Tally<Tally<Estimate>>> for Conditional {
    fn from(tally: Tally<Tally<Estimate>>) -> Self {
        Self(tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_lookup_is_an_explicit_error() {
        let marginal = Marginal::from(Tally::from_fn(|c| match c {
            Category::Idle => Estimate::new(1, 2),
            _ => Estimate::new(0, 0),
        }));
        assert_eq!(marginal.probability(Category::Idle).unwrap(), 0.5);
        assert!(matches!(
            marginal.probability(Category::Attack),
            Err(Error::UndefinedProbability { ref event }) if event == "P(Attack)"
        ));
    }

    #[test]
    fn conditional_rows_are_keyed_by_selection() {
        let conditional = Conditional::from(Tally::from_fn(|selected| {
            Tally::from_fn(|available| match (selected, available) {
                (Category::Attack, Category::Idle) => Estimate::new(2, 2),
                (Category::Attack, _) => Estimate::new(0, 2),
                _ => Estimate::new(0, 0),
            })
        }));
        assert_eq!(conditional.probability(Category::Attack, Category::Idle).unwrap(), 1.0);
        assert_eq!(conditional.probability(Category::Attack, Category::Attack).unwrap(), 0.0);
        assert!(conditional.probability(Category::Idle, Category::Attack).is_err());
        assert_eq!(conditional.given(Category::Attack)[Category::Idle], Estimate::new(2, 2));
    }
}
