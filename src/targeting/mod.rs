use crate::core::point::Point2;
use crate::random::helpers::RandomExt;
use crate::random::unit_source::UnitSource;

/// Something that can be searched for and aimed at.
pub trait Targetable {
    fn id(&self) -> usize;
    fn center(&self) -> Point2;

    // Friendly, dormant or untargetable things return false.
    fn can_be_chased(&self) -> bool {
        true
    }
}

/// Line-of-sight test from a candidate's center to the query origin.
pub type LineOfSight<'a> = &'a dyn Fn(Point2, Point2) -> bool;

/// A search for targets around a point.
#[derive(Clone, Copy)]
pub struct TargetQuery<'a> {
    pub origin: Point2,
    pub range: f32,
    pub ignored: &'a [usize],
    pub line_of_sight: Option<LineOfSight<'a>>,
}

impl<'a> TargetQuery<'a> {
    pub fn new(origin: Point2, range: f32) -> Self {
        TargetQuery {
            origin,
            range,
            ignored: &[],
            line_of_sight: None,
        }
    }

    pub fn ignoring(mut self, ids: &'a [usize]) -> Self {
        self.ignored = ids;
        self
    }

    pub fn with_line_of_sight(mut self, line_of_sight: LineOfSight<'a>) -> Self {
        self.line_of_sight = Some(line_of_sight);
        self
    }

    fn visible(&self, center: Point2) -> bool {
        self.line_of_sight.map_or(true, |can_hit| can_hit(center, self.origin))
    }

    fn eligible<T: Targetable>(&self, candidate: &T) -> bool {
        candidate.can_be_chased() && !self.ignored.contains(&candidate.id())
    }

    /// Every eligible candidate within range, in input order.
    pub fn find_nearby<'t, T: Targetable>(&self, candidates: &'t [T]) -> Vec<&'t T> {
        let range_squared = self.range * self.range;
        candidates
            .iter()
            .filter(|c| self.eligible(*c))
            .filter(|c| (c.center() - self.origin).length_squared() <= range_squared)
            .filter(|c| self.visible(c.center()))
            .collect()
    }

    pub fn find_random_nearby<'t, T: Targetable, R: UnitSource + ?Sized>(
        &self,
        candidates: &'t [T],
        rng: &mut R,
    ) -> Option<&'t T> {
        let nearby = self.find_nearby(candidates);
        if nearby.is_empty() {
            return None;
        }
        Some(nearby[rng.next_index(nearby.len())])
    }

    /// Nearest eligible candidate. On equal distances the later one wins.
    pub fn find_closest<'t, T: Targetable>(&self, candidates: &'t [T]) -> Option<&'t T> {
        let mut closest = None;
        let mut closest_distance = f32::INFINITY;

        for candidate in candidates {
            let distance = candidate.center().distance(self.origin);
            if !self.eligible(candidate) || distance > self.range || distance > closest_distance {
                continue;
            }
            if !self.visible(candidate.center()) {
                continue;
            }
            closest = Some(candidate);
            closest_distance = distance;
        }

        closest
    }

    /// Farthest eligible candidate still in range. On equal distances the later one wins.
    pub fn find_furthest<'t, T: Targetable>(&self, candidates: &'t [T]) -> Option<&'t T> {
        let mut furthest = None;
        let mut furthest_distance = f32::NEG_INFINITY;

        for candidate in candidates {
            let distance = candidate.center().distance(self.origin);
            if !self.eligible(candidate) || distance > self.range || distance < furthest_distance {
                continue;
            }
            if !self.visible(candidate.center()) {
                continue;
            }
            furthest = Some(candidate);
            furthest_distance = distance;
        }

        furthest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::unit_source::SequenceSource;

    #[derive(Debug, PartialEq)]
    struct Dummy {
        id: usize,
        at: Point2,
        hostile: bool,
    }

    impl Targetable for Dummy {
        fn id(&self) -> usize {
            self.id
        }

        fn center(&self) -> Point2 {
            self.at
        }

        fn can_be_chased(&self) -> bool {
            self.hostile
        }
    }

    fn field() -> Vec<Dummy> {
        vec![
            Dummy { id: 0, at: Point2::new(10.0, 0.0), hostile: true },
            Dummy { id: 1, at: Point2::new(0.0, 50.0), hostile: true },
            Dummy { id: 2, at: Point2::new(5.0, 0.0), hostile: false },
            Dummy { id: 3, at: Point2::new(-90.0, 0.0), hostile: true },
            Dummy { id: 4, at: Point2::new(300.0, 0.0), hostile: true },
        ]
    }

    fn ids(found: &[&Dummy]) -> Vec<usize> {
        found.iter().map(|d| d.id).collect()
    }

    #[test]
    fn nearby_filters_range_friendlies_and_ignored() {
        let targets = field();
        let query = TargetQuery::new(Point2::ZERO, 100.0);
        assert_eq!(ids(&query.find_nearby(&targets)), vec![0, 1, 3]);
        assert_eq!(ids(&query.ignoring(&[1]).find_nearby(&targets)), vec![0, 3]);
    }

    #[test]
    fn closest_and_furthest() {
        let targets = field();
        let query = TargetQuery::new(Point2::ZERO, 100.0);
        assert_eq!(query.find_closest(&targets).map(|d| d.id), Some(0));
        assert_eq!(query.find_furthest(&targets).map(|d| d.id), Some(3));
        assert_eq!(TargetQuery::new(Point2::ZERO, 1.0).find_closest(&targets), None);
    }

    #[test]
    fn line_of_sight_hides_targets() {
        let targets = field();
        // A wall on the negative x side.
        let wall = |from: Point2, _to: Point2| from.x >= 0.0;
        let query = TargetQuery::new(Point2::ZERO, 100.0).with_line_of_sight(&wall);
        assert_eq!(query.find_furthest(&targets).map(|d| d.id), Some(1));
        assert_eq!(ids(&query.find_nearby(&targets)), vec![0, 1]);
    }

    #[test]
    fn ties_go_to_the_later_candidate() {
        let targets = vec![
            Dummy { id: 7, at: Point2::new(10.0, 0.0), hostile: true },
            Dummy { id: 8, at: Point2::new(-10.0, 0.0), hostile: true },
        ];
        let query = TargetQuery::new(Point2::ZERO, 50.0);
        assert_eq!(query.find_closest(&targets).map(|d| d.id), Some(8));
        assert_eq!(query.find_furthest(&targets).map(|d| d.id), Some(8));
    }

    #[test]
    fn random_pick_uses_the_source() {
        let targets = field();
        let query = TargetQuery::new(Point2::ZERO, 100.0);
        let mut rng = SequenceSource::new(vec![0.5]);
        assert_eq!(query.find_random_nearby(&targets, &mut rng).map(|d| d.id), Some(1));
        let none = TargetQuery::new(Point2::new(1000.0, 1000.0), 1.0);
        assert_eq!(none.find_random_nearby(&targets, &mut rng), None);
    }
}
