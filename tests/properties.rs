//! Property tests for the timetable GA building blocks.

use proptest::prelude::*;
use u_timetable::ga::{
    count_conflicts, distance, fitness, fitness_sharing, mutate, resolve_conflicts,
    two_point_crossover,
};
use u_timetable::random::create_rng;
use u_timetable::timetable::{Catalog, Lesson, Schedule};

const SUBJECTS: usize = 5;
const TEACHERS: usize = 3;
const GROUPS: usize = 3;
const ROOMS: usize = 2;
const SLOTS: u32 = 4;

fn catalog() -> Catalog {
    Catalog::new(
        ["S0", "S1", "S2", "S3", "S4"],
        ["T0", "T1", "T2"],
        ["G0", "G1", "G2"],
        ["R0", "R1"],
        SLOTS,
    )
    .unwrap()
    .with_teacher_subjects("T0", ["S0", "S1"])
    .with_teacher_subjects("T1", ["S2", "S3"])
    .with_group_subjects("G0", ["S0", "S2", "S4"])
    .with_group_subjects("G1", ["S1", "S3"])
    .with_teacher_max_hours("T0", 5)
    .with_teacher_max_hours("T2", 3)
}

fn schedule_strategy() -> impl Strategy<Value = Schedule> {
    prop::collection::vec(
        (0..TEACHERS, 0..GROUPS, 1..=SLOTS, 0..ROOMS),
        SUBJECTS,
    )
    .prop_map(|fields| {
        fields
            .into_iter()
            .enumerate()
            .map(|(subject, (teacher, group, time, room))| {
                Lesson::new(subject, teacher, group, time, room)
            })
            .collect::<Schedule>()
    })
}

proptest! {
    #[test]
    fn fitness_in_unit_interval(s in schedule_strategy()) {
        let c = catalog();
        let f = fitness(&c, &s);
        prop_assert!(f > 0.0 && f <= 1.0);
        prop_assert_eq!(f == 1.0, count_conflicts(&c, &s).total() == 0);
    }

    #[test]
    fn crossover_keeps_length(a in schedule_strategy(), b in schedule_strategy(), seed in any::<u64>()) {
        let mut rng = create_rng(seed);
        let (c1, c2) = two_point_crossover(&a, &b, &mut rng);
        prop_assert_eq!(c1.len(), SUBJECTS);
        prop_assert_eq!(c2.len(), SUBJECTS);
    }

    #[test]
    fn crossover_takes_genes_from_parents(a in schedule_strategy(), b in schedule_strategy(), seed in any::<u64>()) {
        let mut rng = create_rng(seed);
        let (c1, c2) = two_point_crossover(&a, &b, &mut rng);
        for i in 0..SUBJECTS {
            prop_assert!((c1[i] == a[i] && c2[i] == b[i]) || (c1[i] == b[i] && c2[i] == a[i]));
        }
    }

    #[test]
    fn zero_rate_mutation_is_identity(s in schedule_strategy(), seed in any::<u64>()) {
        let c = catalog();
        let mut rng = create_rng(seed);
        prop_assert_eq!(mutate(&c, &s, 0.0, &mut rng), s);
    }

    #[test]
    fn distance_to_self_is_zero(s in schedule_strategy()) {
        prop_assert_eq!(distance(&s, &s), 0.0);
    }

    #[test]
    fn distance_is_symmetric_and_bounded(a in schedule_strategy(), b in schedule_strategy()) {
        let d = distance(&a, &b);
        prop_assert!((0.0..=1.0).contains(&d));
        prop_assert_eq!(d, distance(&b, &a));
    }

    #[test]
    fn sharing_keeps_cardinality(population in prop::collection::vec(schedule_strategy(), 1..20)) {
        let c = catalog();
        let n = population.len();
        prop_assert_eq!(fitness_sharing(&c, population, false).len(), n);
    }

    #[test]
    fn repair_is_stable(s in schedule_strategy()) {
        let once = resolve_conflicts(s);
        prop_assert_eq!(resolve_conflicts(once.clone()), once);
    }
}
