// tests/search_scenarios.rs

//! Concrete scenarios for the feasibility search.

mod common;
use crate::common::init_tracing;

use std::time::Duration;

use feasrun::sched::{Branch, Schedule, enumerate, feasible_schedules, place, prune};
use feasrun::task::Task;
use feasrun_test_utils::builders::task_secs;

/// Search tests never run any work.
type Ctx = ();

fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}

/// The four-task set with more than one feasible ordering.
fn four_task_set() -> Vec<Task<Ctx>> {
    vec![
        task_secs("t1", 4, 2, 7),
        task_secs("t2", 1, 1, 5),
        task_secs("t3", 1, 2, 6),
        task_secs("t4", 0, 2, 4),
    ]
}

fn assert_schedule_invariants(schedule: &Schedule<Ctx>, expected_len: usize) {
    assert_eq!(schedule.len(), expected_len);

    // Every input task appears exactly once.
    let mut names: Vec<&str> = schedule.iter().map(|s| s.task.name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), expected_len, "duplicate task in schedule");

    let mut previous_finish = Duration::ZERO;
    for slot in schedule.iter() {
        assert_eq!(slot.finish, slot.start + slot.task.cost);
        assert!(slot.finish <= slot.task.deadline, "deadline violated");
        assert!(slot.start >= slot.task.arrival, "started before release");
        assert!(slot.start >= previous_finish, "slots overlap");
        previous_finish = slot.finish;
    }
}

#[test]
fn placement_is_pure_arithmetic() {
    let task = task_secs::<Ctx>("a", 4, 2, 7);

    // Processor free before the release: the task waits for its arrival.
    let early = place(secs(1), &task);
    assert_eq!(early.start, secs(4));
    assert_eq!(early.finish, early.start + task.cost);
    assert!(early.feasible);

    // Processor busy past the release: the task starts late and misses.
    let late = place(secs(6), &task);
    assert_eq!(late.start, secs(6));
    assert_eq!(late.finish, secs(8));
    assert!(!late.feasible);
}

#[test]
fn four_task_set_has_feasible_schedules() {
    init_tracing();

    let tasks = four_task_set();
    let schedules = feasible_schedules(&tasks);

    assert!(!schedules.is_empty());
    for schedule in &schedules {
        assert_schedule_invariants(schedule, tasks.len());
    }

    // The classic ordering t4, t2, t3, t1 must be among the results.
    let orderings: Vec<Vec<&str>> = schedules
        .iter()
        .map(|s| s.iter().map(|slot| slot.task.name.as_str()).collect())
        .collect();
    assert!(orderings.contains(&vec!["t4", "t2", "t3", "t1"]), "{orderings:?}");
}

#[test]
fn single_task_schedules_alone() {
    let tasks = vec![task_secs::<Ctx>("only", 2, 1, 3)];
    let schedules = feasible_schedules(&tasks);

    assert_eq!(schedules.len(), 1);
    let slot = &schedules[0].slots()[0];
    assert_eq!(slot.start, secs(2));
    assert_eq!(slot.finish, secs(3));
}

#[test]
fn overloaded_task_kills_every_ordering() {
    // "fat" cannot finish by its deadline no matter where it is placed.
    let tasks = vec![
        task_secs::<Ctx>("fat", 0, 5, 4),
        task_secs::<Ctx>("partner", 1, 1, 10),
    ];

    assert!(feasible_schedules(&tasks).is_empty());
}

#[test]
fn zero_tasks_yield_one_empty_schedule() {
    let tasks: Vec<Task<Ctx>> = Vec::new();
    let schedules = feasible_schedules(&tasks);

    assert_eq!(schedules.len(), 1);
    assert!(schedules[0].is_empty());
}

#[test]
fn enumeration_is_deterministic() {
    let tasks = four_task_set();

    let first = feasible_schedules(&tasks);
    let second = feasible_schedules(&tasks);

    assert_eq!(first, second);
}

#[test]
fn dead_branches_are_markers_not_short_schedules() {
    // "a" fits on its own, but nothing can follow it in time, so every
    // branch dies before reaching full length.
    let tasks = vec![task_secs::<Ctx>("a", 0, 2, 4), task_secs::<Ctx>("b", 0, 5, 4)];

    let raw = enumerate(&tasks);
    assert!(raw.iter().any(|b| matches!(b, Branch::Dead)));
    assert!(!raw.iter().any(|b| matches!(b, Branch::Feasible(s) if s.len() == tasks.len())));

    assert!(prune(raw, tasks.len()).is_empty());
}
