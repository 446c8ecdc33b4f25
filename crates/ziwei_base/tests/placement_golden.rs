//! Integration tests for bureau resolution, anchor placement, and limit
//! arithmetic. Pure-math tests over the fixed tables.

use ziwei_base::{
    ALL_BRANCHES, ALL_STEMS, Branch, Bureau, Gender, Stem, age_for_year_branch, branch_distance,
    bureau_for, decade_window, limit_direction, small_limit_branch, tian_fu_branch, year_branch,
    zi_wei_branch,
};

// ---------------------------------------------------------------------------
// Bureau
// ---------------------------------------------------------------------------

#[test]
fn bureau_exhaustive_120() {
    // reference values by stem-pair row and branch-pair column
    let expected: [[u8; 6]; 5] = [
        [4, 2, 6, 4, 2, 6],
        [2, 6, 5, 2, 6, 5],
        [6, 5, 3, 6, 5, 3],
        [5, 3, 4, 5, 3, 4],
        [3, 4, 2, 3, 4, 2],
    ];
    for s in ALL_STEMS {
        for b in ALL_BRANCHES {
            let got = bureau_for(s, b).value();
            let want = expected[(s.index() / 2) as usize][(b.index() / 2) as usize];
            assert_eq!(got, want, "bureau for {}{}", s.symbol(), b.symbol());
            assert!((2..=6).contains(&got));
        }
    }
}

// ---------------------------------------------------------------------------
// Anchors
// ---------------------------------------------------------------------------

#[test]
fn zi_wei_worked_examples() {
    // bureau 4, day 10 -> branch index 6; bureau 2, day 2 -> index 2
    assert_eq!(zi_wei_branch(Bureau::Metal, 10).index(), 6);
    assert_eq!(zi_wei_branch(Bureau::Water, 2).index(), 2);
}

#[test]
fn zi_wei_exact_division_column() {
    // day = bureau * k: x = k, r = 0, index = (k + 1) % 12
    for (bureau, b) in [
        (Bureau::Water, 2),
        (Bureau::Wood, 3),
        (Bureau::Metal, 4),
        (Bureau::Earth, 5),
        (Bureau::Fire, 6),
    ] {
        for k in 1i32..=(30 / b) {
            let day = (b * k) as u8;
            assert_eq!(
                zi_wei_branch(bureau, day).index() as i32,
                (k + 1) % 12,
                "bureau {b}, day {day}"
            );
        }
    }
}

#[test]
fn anchors_mirror_for_all_days() {
    for day in 1..=30u8 {
        let zw = zi_wei_branch(Bureau::Earth, day);
        let tf = tian_fu_branch(zw);
        assert_eq!((zw.index() as i32 + tf.index() as i32) % 12, 4);
    }
}

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

#[test]
fn decade_windows_cover_120_years_both_directions() {
    let birth_year = 2024;
    for dir in [
        limit_direction(Gender::Male, Stem::Jia),
        limit_direction(Gender::Female, Stem::Jia),
    ] {
        let life = Branch::Yin;
        let mut spans: Vec<(i32, i32)> = ALL_BRANCHES
            .iter()
            .map(|&b| {
                let w = decade_window(Bureau::Fire, branch_distance(life, b, dir), birth_year);
                (w.start_year, w.end_year)
            })
            .collect();
        spans.sort_unstable();
        assert_eq!(spans[0].0, birth_year + 6 - 1);
        assert_eq!(spans[11].1, birth_year + 6 - 1 + 119);
        for pair in spans.windows(2) {
            assert_eq!(pair[1].0, pair[0].1 + 1, "gap or overlap in {pair:?}");
        }
    }
}

#[test]
fn small_limit_twelve_year_cycle() {
    for age in 1..=24u16 {
        let a = small_limit_branch(Branch::Wu, Gender::Male, age);
        let b = small_limit_branch(Branch::Wu, Gender::Male, age + 12);
        assert_eq!(a, b);
    }
}

#[test]
fn age_resolution_scans_forward() {
    // decade 2029-2038 for a 2024 birth; the year branch of 2030 is Xu
    let w = decade_window(Bureau::Fire, 0, 2024);
    assert_eq!(year_branch(2030), Branch::Xu);
    assert_eq!(age_for_year_branch(&w, 2024, Branch::Xu), Some(7));
}
