use super::*;

#[test]
fn nothing_fires_before_delay() {
    let mut sched = ManualScheduler::new();
    sched.schedule(800, Timer::BotReply);
    assert!(sched.advance(799).is_empty());
    assert_eq!(sched.pending(), 1);
    assert_eq!(sched.advance(1), vec![Timer::BotReply]);
    assert_eq!(sched.pending(), 0);
}

#[test]
fn fired_timers_do_not_fire_again() {
    let mut sched = ManualScheduler::new();
    sched.schedule(10, Timer::BotReply);
    assert_eq!(sched.advance(10).len(), 1);
    assert!(sched.advance(1000).is_empty());
}

#[test]
fn equal_delays_fire_in_scheduling_order() {
    let mut sched = ManualScheduler::new();
    for _ in 0..3 {
        sched.schedule(800, Timer::BotReply);
    }
    assert_eq!(sched.advance(800).len(), 3);
}

#[test]
fn staggered_timers_fire_independently() {
    let mut sched = ManualScheduler::new();
    sched.schedule(800, Timer::BotReply);
    sched.advance(100);
    sched.schedule(800, Timer::BotReply);

    assert_eq!(sched.now_ms(), 100);
    assert_eq!(sched.advance(700).len(), 1);
    assert_eq!(sched.pending(), 1);
    assert_eq!(sched.advance(100).len(), 1);
    assert_eq!(sched.now_ms(), 900);
}

#[test]
fn zero_delay_fires_on_next_advance() {
    let mut sched = ManualScheduler::new();
    sched.schedule(0, Timer::BotReply);
    assert_eq!(sched.advance(0), vec![Timer::BotReply]);
}
