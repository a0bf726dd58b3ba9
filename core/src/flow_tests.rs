//! End-to-end navigation episodes
//!
//! Drives classifier, signal, and animator together the way the UI layer
//! does: a click is classified, the signal raised, ticks fabricate progress,
//! the observed location change clears the signal, and the bar completes
//! and hides.

use super::animator::{AnimatorConfig, AnimatorPhase, ProgressAnimator};
use super::intent::{Destination, NavigationIntent};
use super::signal::NavigationSignal;

/// What the link interceptor does on activation
fn click(
    signal: &NavigationSignal,
    to: &str,
    target: Option<&str>,
    current: &str,
) -> NavigationIntent {
    let intent = NavigationIntent::classify(&Destination::from(to), target, current);
    if intent.raises_signal() {
        signal.set_navigating(true);
    }
    intent
}

#[test]
fn test_full_navigation_episode() {
    let signal = NavigationSignal::new();
    let mut watch = signal.watch();
    let mut animator = ProgressAnimator::with_seed(AnimatorConfig::default(), 17);

    // Mounted at /a, nothing in flight
    assert!(!watch.get());
    assert_eq!(animator.phase(), AnimatorPhase::Idle);

    // Click a link to /b
    let intent = click(&signal, "/b", None, "/a");
    assert_eq!(intent, NavigationIntent::Navigate);
    assert!(watch.latest());

    // The bar driver sees the raise and starts ticking
    assert!(animator.start());
    assert_eq!(animator.percent(), 0.0);
    assert!(animator.is_visible());

    let mut previous = 0.0;
    for _ in 0..150 {
        let percent = animator.advance();
        assert!(percent >= previous, "percent went backwards");
        assert!(percent <= 90.0, "percent finished before the navigation did");
        previous = percent;
    }
    assert_eq!(animator.percent(), 90.0, "long navigations stall at the hold");

    // The router commits: the location observer sees /b and clears the signal
    signal.set_navigating(false);
    assert!(!watch.latest());

    // The driver cancels its ticker and completes
    assert!(animator.complete());
    assert_eq!(animator.percent(), 100.0);
    assert!(animator.is_visible());

    // The completion delay elapses
    assert!(animator.dismiss());
    assert_eq!(animator.phase(), AnimatorPhase::Idle);
    assert_eq!(animator.percent(), 0.0);
    assert!(!animator.is_visible());
}

#[test]
fn test_rapid_double_click_is_idempotent() {
    let signal = NavigationSignal::new();
    let mut watch = signal.watch();
    let mut animator = ProgressAnimator::with_seed(AnimatorConfig::default(), 23);

    click(&signal, "/b", None, "/a");
    assert!(watch.latest());
    animator.start();
    for _ in 0..10 {
        animator.advance();
    }
    let before = animator.percent();

    // The second click lands before the router responds; classification
    // still compares against the old location
    let intent = click(&signal, "/b", None, "/a");
    assert_eq!(intent, NavigationIntent::Navigate);
    assert!(!watch.has_changed(), "redundant raise must not wake the driver");

    // Even a driver that calls start defensively keeps its progress
    assert!(!animator.start());
    assert_eq!(animator.percent(), before);
}

#[test]
fn test_excluded_activations_never_raise_the_signal() {
    let signal = NavigationSignal::new();

    let cases = [
        ("/a", None, NavigationIntent::SamePage),
        ("/b", Some("_blank"), NavigationIntent::NewTab),
        ("#totals", None, NavigationIntent::Fragment),
    ];
    for (to, target, expected) in cases {
        let intent = click(&signal, to, target, "/a");
        assert_eq!(intent, expected, "wrong classification for {to}");
        assert!(!signal.is_navigating(), "{to} must not raise the signal");
    }
}

#[test]
fn test_new_navigation_during_completion_restarts_the_bar() {
    let signal = NavigationSignal::new();
    let mut animator = ProgressAnimator::with_seed(AnimatorConfig::default(), 29);

    // First navigation settles; the bar sits in its completion window
    click(&signal, "/b", None, "/a");
    animator.start();
    for _ in 0..40 {
        animator.advance();
    }
    signal.set_navigating(false);
    animator.complete();
    assert_eq!(animator.phase(), AnimatorPhase::Completing);

    // A second click arrives before the bar dismissed
    let intent = click(&signal, "/c", None, "/b");
    assert_eq!(intent, NavigationIntent::Navigate);
    assert!(signal.is_navigating());

    assert!(animator.start());
    assert_eq!(animator.percent(), 0.0, "restart begins a fresh episode");
    assert_eq!(animator.phase(), AnimatorPhase::Ticking);
}

#[test]
fn test_second_episode_matches_the_first() {
    let signal = NavigationSignal::new();
    let mut animator = ProgressAnimator::with_seed(AnimatorConfig::default(), 31);

    for (from, to) in [("/a", "/b"), ("/b", "/c")] {
        let intent = click(&signal, to, None, from);
        assert_eq!(intent, NavigationIntent::Navigate);
        assert!(signal.is_navigating());

        animator.start();
        assert_eq!(animator.percent(), 0.0);
        for _ in 0..150 {
            animator.advance();
        }
        assert_eq!(animator.percent(), 90.0);

        signal.set_navigating(false);
        animator.complete();
        assert_eq!(animator.percent(), 100.0);
        animator.dismiss();

        // Internal state equals the pre-navigation initial state
        assert_eq!(animator.phase(), AnimatorPhase::Idle);
        assert_eq!(animator.percent(), 0.0);
        assert!(!animator.is_visible());
        assert!(!signal.is_navigating());
    }
}
