use super::Conditional;
use super::Estimate;
use super::Marginal;
use super::Priors;
use crate::Count;
use crate::category::Category;
use crate::category::Tally;
use crate::record::Record;

/// Selection and availability counters over a corpus of decisions.
///
/// Three tables are kept:
/// - `total[c]`: decisions in which `c` was available
/// - `selected[c]`: decisions in which `c` was chosen
/// - `coselect[c][c2]`: decisions in which `c` was chosen while `c2` was available
///
/// Counters only ever grow. Aggregators built over disjoint parts of a corpus
/// can be merged with `absorb` in any order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Aggregator {
    records: Count,
    total: Tally<Count>,
    selected: Tally<Count>,
    coselect: Tally<Tally<Count>>,
}

impl Aggregator {
    /// Fold one decision into the counters. Availability is counted even
    /// when the selection could not be parsed.
    pub fn ingest(&mut self, record: &Record) {
        self.records += 1;
        for available in record.available().iter() {
            self.total[available] += 1;
        }
        if let Some(selected) = record.selected() {
            self.selected[selected] += 1;
            for available in record.available().iter() {
                self.coselect[selected][available] += 1;
            }
        }
    }
    /// Builder-style ingest, handy in folds.
    pub fn increment(mut self, record: &Record) -> Self {
        self.ingest(record);
        self
    }
    /// Absorb the counters of another aggregator into this one.
    pub fn absorb(&mut self, other: &Self) {
        self.records += other.records;
        self.total.absorb(&other.total);
        self.selected.absorb(&other.selected);
        self.coselect.absorb_nested(&other.coselect);
    }

    pub fn records(&self) -> Count {
        self.records
    }
    pub fn total(&self, category: Category) -> Count {
        self.total[category]
    }
    pub fn selected(&self, category: Category) -> Count {
        self.selected[category]
    }
    pub fn coselected(&self, selected: Category, available: Category) -> Count {
        self.coselect[selected][available]
    }

    /// selected[c] / total[c]
    pub fn marginal(&self) -> Marginal {
        Marginal::from(Tally::from_fn(|c| {
            Estimate::new(self.selected[c], self.total[c])
        }))
    }
    /// coselect[c][c2] / selected[c]
    pub fn conditional(&self) -> Conditional {
        Conditional::from(Tally::from_fn(|c| {
            Tally::from_fn(|c2| Estimate::new(self.coselect[c][c2], self.selected[c]))
        }))
    }
    pub fn priors(&self) -> Priors {
        Priors {
            marginal: self.marginal(),
            conditional: self.conditional(),
        }
    }
}

impl<'a> FromIterator<&'a Record> for Aggregator {
    fn from_iter<I: IntoIterator<Item = &'a Record>>(records: I) -> Self {
        records
            .into_iter()
            .fold(Self::default(), |aggregator, record| aggregator.increment(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::Error;
    use crate::features::Features;
    use crate::record::Options;

    fn mv(bits: u8) -> Category {
        Category::Move(Features::from(bits))
    }

    fn parse(lines: &[&str]) -> Vec<Record> {
        lines
            .iter()
            .map(|line| Record::try_from(*line).unwrap())
            .collect()
    }

    fn corpus() -> Vec<Record> {
        (0..256).map(|_| Record::random()).collect()
    }

    #[test]
    fn counts_a_single_idle_decision() {
        let records = parse(&["A,0,Idle#ATTACK:1,MOVE:r1#r1:1010"]);
        let aggregator = records.iter().collect::<Aggregator>();
        assert_eq!(aggregator.selected(Category::Idle), 1);
        assert_eq!(aggregator.total(Category::Idle), 1);
        assert_eq!(aggregator.total(Category::Attack), 1);
        assert_eq!(aggregator.total(mv(0b1010)), 1);
        assert_eq!(aggregator.total(mv(0b0000)), 0);
        let marginal = aggregator.marginal();
        assert_eq!(marginal.probability(Category::Idle).unwrap(), 1.0);
        assert_eq!(marginal.get(Category::Attack), Estimate::new(0, 1));
        assert!(!marginal.get(mv(0b0101)).is_defined());
        let conditional = aggregator.conditional();
        assert_eq!(conditional.probability(Category::Idle, Category::Attack).unwrap(), 1.0);
        assert_eq!(conditional.probability(Category::Idle, mv(0b0001)).unwrap(), 0.0);
        assert!(conditional.probability(Category::Attack, Category::Idle).is_err());
    }

    #[test]
    fn two_level_counts() {
        let records = parse(&[
            "0,T,1,Idle,1#ATTACK,MOVE:2#1:0,0,0,0#2:0,1,0,1",
            "0,T,1,Attack,1#ATTACK#1:0,1,0,0",
            "0,T,1,Move,2#MOVE:2,MOVE:3#1:0,0,0,0#2:0,1,0,1#3:1,0,0,0",
            "0,T,1,Idle,1#MOVE:3#1:0,0,0,0#3:1,0,0,0",
        ]);
        let aggregator = records.iter().collect::<Aggregator>();
        assert_eq!(aggregator.records(), 4);
        assert_eq!(aggregator.total(Category::Idle), 4);
        assert_eq!(aggregator.total(Category::Attack), 2);
        assert_eq!(aggregator.total(mv(0b0101)), 2);
        assert_eq!(aggregator.total(mv(0b1000)), 2);
        assert_eq!(aggregator.selected(Category::Idle), 2);
        assert_eq!(aggregator.selected(Category::Attack), 1);
        assert_eq!(aggregator.selected(mv(0b0101)), 1);
        assert_eq!(aggregator.coselected(Category::Idle, Category::Attack), 1);
        assert_eq!(aggregator.coselected(Category::Idle, mv(0b1000)), 1);
        assert_eq!(aggregator.coselected(mv(0b0101), mv(0b1000)), 1);

        let marginal = aggregator.marginal();
        assert_eq!(marginal.probability(Category::Idle).unwrap(), 0.5);
        assert_eq!(marginal.probability(Category::Attack).unwrap(), 0.5);
        assert_eq!(marginal.probability(mv(0b0101)).unwrap(), 0.5);
        assert_eq!(marginal.probability(mv(0b1000)).unwrap(), 0.0);

        let conditional = aggregator.conditional();
        assert_eq!(conditional.probability(Category::Idle, Category::Idle).unwrap(), 1.0);
        assert_eq!(conditional.probability(Category::Idle, Category::Attack).unwrap(), 0.5);
        assert_eq!(conditional.get(Category::Idle, mv(0b0101)), Estimate::new(1, 2));
    }

    #[test]
    fn unparseable_selection_only_counts_availability() {
        let records = parse(&["0,T,1,Heal,1#ATTACK#1:0,1,0,0"]);
        let aggregator = records.iter().collect::<Aggregator>();
        assert_eq!(aggregator.records(), 1);
        assert_eq!(aggregator.total(Category::Idle), 1);
        assert_eq!(aggregator.total(Category::Attack), 1);
        assert!(Category::all().iter().all(|c| aggregator.selected(*c) == 0));
        assert!(
            Category::all()
                .iter()
                .all(|c| Category::all().iter().all(|c2| aggregator.coselected(*c, *c2) == 0))
        );
    }

    #[test]
    fn selection_outside_options_leaves_marginal_undefined() {
        let records = parse(&["0,T,1,Attack,1#MOVE:2#2:0000"]);
        assert!(!records[0].is_consistent());
        let aggregator = records.iter().collect::<Aggregator>();
        assert_eq!(aggregator.selected(Category::Attack), 1);
        assert_eq!(aggregator.total(Category::Attack), 0);
        assert!(aggregator.selected(Category::Attack) > aggregator.total(Category::Attack));

        let marginal = aggregator.marginal();
        assert_eq!(marginal.get(Category::Attack), Estimate::Undefined { hits: 1 });
        assert!(matches!(
            marginal.probability(Category::Attack),
            Err(Error::UndefinedProbability { .. })
        ));

        let conditional = aggregator.conditional();
        assert_eq!(conditional.probability(Category::Attack, Category::Idle).unwrap(), 1.0);
        assert_eq!(conditional.probability(Category::Attack, mv(0b0000)).unwrap(), 1.0);
        assert_eq!(conditional.probability(Category::Attack, Category::Attack).unwrap(), 0.0);
    }

    #[test]
    fn duplicate_moves_count_once() {
        let doubled = parse(&["0,T,1,Idle,1#MOVE:2,MOVE:3#2:0,1,1,0#3:0,1,1,0"]);
        let single = parse(&["0,T,1,Idle,1#MOVE:2#2:0,1,1,0"]);
        assert_eq!(
            doubled.iter().collect::<Aggregator>(),
            single.iter().collect::<Aggregator>()
        );
    }

    #[test]
    fn probabilities_are_bounded() {
        let aggregator = corpus().iter().collect::<Aggregator>();
        let marginal = aggregator.marginal();
        let conditional = aggregator.conditional();
        for c in Category::all() {
            if let Some(p) = marginal.get(c).value() {
                assert!((0.0..=1.0).contains(&p));
            }
            for c2 in Category::all() {
                if let Some(p) = conditional.get(c, c2).value() {
                    assert!((0.0..=1.0).contains(&p));
                }
            }
        }
    }

    #[test]
    fn counter_invariants_hold_for_well_formed_records() {
        let aggregator = corpus().iter().collect::<Aggregator>();
        assert_eq!(aggregator.total(Category::Idle), aggregator.records());
        for c in Category::all() {
            assert!(aggregator.total(c) >= aggregator.selected(c));
            assert_eq!(aggregator.coselected(c, c), aggregator.selected(c));
            for c2 in Category::all() {
                assert!(aggregator.coselected(c, c2) <= aggregator.selected(c));
            }
        }
    }

    #[test]
    fn ingesting_twice_preserves_estimates() {
        let records = corpus();
        let once = records.iter().collect::<Aggregator>();
        let twice = records.iter().chain(records.iter()).collect::<Aggregator>();
        assert_eq!(twice.records(), 2 * once.records());
        assert_eq!(once.priors(), {
            let p = twice.priors();
            Priors {
                marginal: Marginal::from(Tally::from_fn(|c| {
                    let e = p.marginal.get(c);
                    Estimate::new(e.hits() / 2, e.trials() / 2)
                })),
                conditional: Conditional::from(Tally::from_fn(|c| {
                    Tally::from_fn(|c2| {
                        let e = p.conditional.get(c, c2);
                        Estimate::new(e.hits() / 2, e.trials() / 2)
                    })
                })),
            }
        });
        for c in Category::all() {
            assert_eq!(once.marginal().get(c).value(), twice.marginal().get(c).value());
        }
    }

    #[test]
    fn absorb_matches_sequential_ingest() {
        let records = corpus();
        let (left, right) = records.split_at(100);
        let mut merged = left.iter().collect::<Aggregator>();
        merged.absorb(&right.iter().collect::<Aggregator>());
        assert_eq!(merged, records.iter().collect::<Aggregator>());

        let mut reversed = right.iter().collect::<Aggregator>();
        reversed.absorb(&left.iter().collect::<Aggregator>());
        assert_eq!(merged, reversed);
    }

    #[test]
    fn empty_corpus_is_entirely_undefined() {
        let aggregator = Aggregator::default();
        let priors = aggregator.priors();
        assert!(priors.marginal.iter().all(|(_, e)| !e.is_defined()));
        assert!(
            priors
                .conditional
                .iter()
                .all(|(_, row)| row.values().all(|e| !e.is_defined()))
        );
    }

    #[test]
    fn explicit_records_without_parsing() {
        let record = Record::new(Some(Category::Attack), Options::idle() + Category::Attack);
        let aggregator = Aggregator::default().increment(&record).increment(&record);
        assert_eq!(aggregator.selected(Category::Attack), 2);
        assert_eq!(
            aggregator
                .conditional()
                .probability(Category::Attack, Category::Idle)
                .unwrap(),
            1.0
        );
    }
}
