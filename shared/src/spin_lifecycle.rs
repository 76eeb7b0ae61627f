//! Spin lifecycle state machine.
//!
//! The controller owns the single authoritative [`SpinPhase`] and never touches
//! a clock or the network itself. Every transition returns the [`SpinCommand`]s
//! the host must carry out (start or cancel a timer, send the selection
//! request), and the host reports back through [`SpinController::timer_fired`]
//! and [`SpinController::selection_resolved`]. Each spin gets a fresh ticket;
//! callbacks carrying an older ticket are ignored, which is what keeps a late
//! timer or response from mutating a newer spin or a torn-down view.

use std::fmt;

use log::{debug, warn};
use rand::Rng;

use crate::constants::{REVEAL_DELAY_MS, SPIN_DWELL_MS};
use crate::shared_wheel_game::{FoodItem, SpinResult, ThemeSpec};
use crate::wheel_geometry::{build_wheel_face, WheelDimensions, WheelFace};
use crate::wheel_palette::page_background;
use crate::wheel_rotation::WheelRotation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpinPhase {
    Idle,
    Spinning,
    Revealing,
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpinTimer {
    /// Minimum time the wheel keeps spinning, whatever the network does
    Dwell,
    /// Settling pause between the wheel stopping and the result panel
    Reveal,
    /// Optional upper bound on the selection request
    RequestTimeout,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpinCommand {
    StartTimer {
        timer: SpinTimer,
        ticket: u64,
        delay_ms: u32,
    },
    CancelTimer(SpinTimer),
    RequestSelection {
        ticket: u64,
        foods: Vec<FoodItem>,
    },
}

/// Failure of the selection request. Always sends the controller back to Idle.
#[derive(Debug, Clone, PartialEq)]
pub enum SpinError {
    Transport(String),
    Status(u16),
    Decode(String),
    Timeout,
}

impl fmt::Display for SpinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "Network error: {}", e),
            Self::Status(code) => write!(f, "Selection service returned status {}", code),
            Self::Decode(e) => write!(f, "Invalid selection response: {}", e),
            Self::Timeout => write!(f, "Selection request timed out"),
        }
    }
}

impl std::error::Error for SpinError {}

/// The selection service broke its side of the contract. Logged, never fatal.
#[derive(Debug, Clone, PartialEq)]
pub enum ContractViolation {
    UnknownSelection { selected: String },
    OptionCountMismatch { submitted: usize, reported: usize },
    EmptyPalette { theme: String },
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSelection { selected } => {
                write!(f, "Selected food {:?} was not among the submitted items", selected)
            }
            Self::OptionCountMismatch { submitted, reported } => write!(
                f,
                "Submitted {} options but the service reported {}",
                submitted, reported
            ),
            Self::EmptyPalette { theme } => write!(f, "Theme {:?} has no colors", theme),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinTimings {
    pub dwell_ms: u32,
    pub reveal_ms: u32,
    pub request_timeout_ms: Option<u32>,
}

impl Default for SpinTimings {
    fn default() -> Self {
        Self {
            dwell_ms: SPIN_DWELL_MS,
            reveal_ms: REVEAL_DELAY_MS,
            request_timeout_ms: None,
        }
    }
}

impl SpinTimings {
    pub fn with_request_timeout(mut self, timeout_ms: u32) -> Self {
        self.request_timeout_ms = Some(timeout_ms);
        self
    }
}

#[derive(Debug)]
pub struct SpinController<R> {
    phase: SpinPhase,
    foods: Vec<FoodItem>,
    rotation: WheelRotation,
    theme: Option<ThemeSpec>,
    result: Option<SpinResult>,
    // Response that arrived before the dwell timer, held until it fires
    held: Option<SpinResult>,
    submitted: Vec<FoodItem>,
    ticket: u64,
    in_flight: bool,
    dwell_elapsed: bool,
    timings: SpinTimings,
    last_error: Option<SpinError>,
    violations: Vec<ContractViolation>,
    rng: R,
}

impl<R: Rng> SpinController<R> {
    pub fn new(rng: R) -> Self {
        Self::with_timings(SpinTimings::default(), rng)
    }

    pub fn with_timings(timings: SpinTimings, rng: R) -> Self {
        Self {
            phase: SpinPhase::Idle,
            foods: Vec::new(),
            rotation: WheelRotation::new(),
            theme: None,
            result: None,
            held: None,
            submitted: Vec::new(),
            ticket: 0,
            in_flight: false,
            dwell_elapsed: false,
            timings,
            last_error: None,
            violations: Vec::new(),
            rng,
        }
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    pub fn rotation(&self) -> f64 {
        self.rotation.degrees()
    }

    pub fn theme(&self) -> Option<&ThemeSpec> {
        self.theme.as_ref()
    }

    pub fn background(&self) -> &str {
        page_background(self.theme.as_ref())
    }

    /// The released result. Only set from Revealing onwards.
    pub fn result(&self) -> Option<&SpinResult> {
        self.result.as_ref()
    }

    pub fn last_error(&self) -> Option<&SpinError> {
        self.last_error.as_ref()
    }

    /// Contract problems seen in the current spin's response
    pub fn violations(&self) -> &[ContractViolation] {
        &self.violations
    }

    pub fn in_flight_requests(&self) -> usize {
        usize::from(self.in_flight)
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, SpinPhase::Spinning | SpinPhase::Revealing)
    }

    pub fn can_spin(&self) -> bool {
        !self.is_busy() && !self.foods.is_empty()
    }

    pub fn show_result(&self) -> bool {
        self.phase == SpinPhase::Result && self.result.is_some()
    }

    pub fn wheel_face(&self, dims: WheelDimensions) -> WheelFace {
        build_wheel_face(&self.foods, dims, self.theme.as_ref())
    }

    /// Replaces the wheel's items. A shown result is dismissed; an in-flight
    /// spin keeps the list it was started with.
    pub fn set_foods(&mut self, foods: Vec<FoodItem>) {
        self.foods = foods;
        if self.phase == SpinPhase::Result {
            self.result = None;
            self.phase = SpinPhase::Idle;
        }
    }

    /// Starts a spin from Idle or Result. Ignored while a spin is running or
    /// when there is nothing to spin.
    pub fn request_spin(&mut self) -> Vec<SpinCommand> {
        if self.is_busy() {
            debug!("Spin request ignored, wheel is {:?}", self.phase);
            return Vec::new();
        }
        if self.foods.is_empty() {
            debug!("Spin request ignored, no food items");
            return Vec::new();
        }

        self.ticket += 1;
        self.result = None;
        self.held = None;
        self.last_error = None;
        self.violations.clear();
        self.dwell_elapsed = false;
        self.in_flight = true;
        self.submitted = self.foods.clone();
        let target = self.rotation.advance(&mut self.rng);
        self.phase = SpinPhase::Spinning;
        debug!("Spin {} started, rotating to {:.1} degrees", self.ticket, target);

        let mut commands = vec![SpinCommand::StartTimer {
            timer: SpinTimer::Dwell,
            ticket: self.ticket,
            delay_ms: self.timings.dwell_ms,
        }];
        if let Some(timeout_ms) = self.timings.request_timeout_ms {
            commands.push(SpinCommand::StartTimer {
                timer: SpinTimer::RequestTimeout,
                ticket: self.ticket,
                delay_ms: timeout_ms,
            });
        }
        commands.push(SpinCommand::RequestSelection {
            ticket: self.ticket,
            foods: self.submitted.clone(),
        });
        commands
    }

    /// "Spin again": dismisses the shown result
    pub fn spin_again(&mut self) {
        if self.phase == SpinPhase::Result {
            self.result = None;
            self.phase = SpinPhase::Idle;
        }
    }

    pub fn timer_fired(&mut self, timer: SpinTimer, ticket: u64) -> Vec<SpinCommand> {
        if ticket != self.ticket {
            debug!("Dropping stale {:?} timer from spin {}", timer, ticket);
            return Vec::new();
        }

        match (timer, self.phase) {
            (SpinTimer::Dwell, SpinPhase::Spinning) => {
                self.dwell_elapsed = true;
                if self.held.is_some() {
                    self.enter_revealing()
                } else {
                    debug!("Dwell elapsed, still waiting on spin {}", self.ticket);
                    Vec::new()
                }
            }
            (SpinTimer::Reveal, SpinPhase::Revealing) => {
                self.phase = SpinPhase::Result;
                Vec::new()
            }
            (SpinTimer::RequestTimeout, SpinPhase::Spinning) if self.in_flight => {
                self.fail(SpinError::Timeout)
            }
            _ => Vec::new(),
        }
    }

    pub fn selection_resolved(
        &mut self,
        ticket: u64,
        outcome: Result<SpinResult, SpinError>,
    ) -> Vec<SpinCommand> {
        if ticket != self.ticket || !self.in_flight {
            debug!("Dropping stale selection response from spin {}", ticket);
            return Vec::new();
        }
        self.in_flight = false;

        match outcome {
            Ok(result) => {
                self.check_contract(&result);
                self.held = Some(result);
                let mut commands = Vec::new();
                if self.timings.request_timeout_ms.is_some() {
                    commands.push(SpinCommand::CancelTimer(SpinTimer::RequestTimeout));
                }
                if self.dwell_elapsed {
                    commands.extend(self.enter_revealing());
                }
                commands
            }
            Err(err) => self.fail(err),
        }
    }

    /// Invalidates every outstanding timer and response. Call when the hosting
    /// view goes away.
    pub fn teardown(&mut self) -> Vec<SpinCommand> {
        self.ticket += 1;
        self.in_flight = false;
        self.held = None;
        self.dwell_elapsed = false;
        if self.is_busy() {
            self.phase = SpinPhase::Idle;
        }
        Self::cancel_all()
    }

    fn enter_revealing(&mut self) -> Vec<SpinCommand> {
        let Some(result) = self.held.take() else {
            return Vec::new();
        };
        if !result.theme.colors.is_empty() {
            self.theme = Some(result.theme.clone());
        }
        debug!("Revealing {:?} for spin {}", result.selected_food, self.ticket);
        self.result = Some(result);
        self.phase = SpinPhase::Revealing;
        vec![SpinCommand::StartTimer {
            timer: SpinTimer::Reveal,
            ticket: self.ticket,
            delay_ms: self.timings.reveal_ms,
        }]
    }

    fn fail(&mut self, err: SpinError) -> Vec<SpinCommand> {
        warn!("Spin {} failed: {}", self.ticket, err);
        self.phase = SpinPhase::Idle;
        self.in_flight = false;
        self.held = None;
        self.result = None;
        self.dwell_elapsed = false;
        self.last_error = Some(err);
        Self::cancel_all()
    }

    fn cancel_all() -> Vec<SpinCommand> {
        vec![
            SpinCommand::CancelTimer(SpinTimer::Dwell),
            SpinCommand::CancelTimer(SpinTimer::Reveal),
            SpinCommand::CancelTimer(SpinTimer::RequestTimeout),
        ]
    }

    fn check_contract(&mut self, result: &SpinResult) {
        let mut found = Vec::new();
        if !self.submitted.contains(&result.selected_food) {
            found.push(ContractViolation::UnknownSelection {
                selected: result.selected_food.clone(),
            });
        }
        if result.total_options != self.submitted.len() {
            found.push(ContractViolation::OptionCountMismatch {
                submitted: self.submitted.len(),
                reported: result.total_options,
            });
        }
        if result.theme.colors.is_empty() {
            found.push(ContractViolation::EmptyPalette {
                theme: result.theme.name.clone(),
            });
        }
        for violation in &found {
            warn!("Selection service contract violation: {}", violation);
        }
        self.violations.extend(found);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rand::rngs::mock::StepRng;

    type Outcome = Result<SpinResult, SpinError>;

    /// Drives a controller against a simulated clock. Timers and the mocked
    /// selection service are resolved in time order as the clock advances.
    struct SimulatedHost {
        controller: SpinController<StepRng>,
        now_ms: u64,
        timers: Vec<(u64, SpinTimer, u64)>,
        response: Option<(u64, u64, Outcome)>,
        service: Option<(u64, Outcome)>,
        requests: Vec<Vec<FoodItem>>,
    }

    impl SimulatedHost {
        fn new(timings: SpinTimings) -> Self {
            Self {
                controller: SpinController::with_timings(timings, StepRng::new(0, 0)),
                now_ms: 0,
                timers: Vec::new(),
                response: None,
                service: None,
                requests: Vec::new(),
            }
        }

        /// The next selection request answers with `outcome` after `latency_ms`
        fn respond_with(&mut self, latency_ms: u64, outcome: Outcome) {
            self.service = Some((latency_ms, outcome));
        }

        fn spin(&mut self) {
            let commands = self.controller.request_spin();
            self.apply(commands);
        }

        fn apply(&mut self, commands: Vec<SpinCommand>) {
            for command in commands {
                match command {
                    SpinCommand::StartTimer { timer, ticket, delay_ms } => {
                        self.timers.retain(|(_, t, _)| *t != timer);
                        self.timers.push((self.now_ms + delay_ms as u64, timer, ticket));
                    }
                    SpinCommand::CancelTimer(timer) => {
                        self.timers.retain(|(_, t, _)| *t != timer);
                    }
                    SpinCommand::RequestSelection { ticket, foods } => {
                        self.requests.push(foods);
                        if let Some((latency, outcome)) = self.service.take() {
                            self.response = Some((self.now_ms + latency, ticket, outcome));
                        }
                    }
                }
            }
        }

        fn advance_to(&mut self, until_ms: u64) {
            loop {
                let next_timer = self.timers.iter().map(|(due, _, _)| *due).min();
                let next_response = self.response.as_ref().map(|(due, _, _)| *due);
                let next = match (next_timer, next_response) {
                    (Some(t), Some(r)) => t.min(r),
                    (Some(t), None) => t,
                    (None, Some(r)) => r,
                    (None, None) => break,
                };
                if next > until_ms {
                    break;
                }
                self.now_ms = next;

                if next_response == Some(next) {
                    let (_, ticket, outcome) = self.response.take().unwrap();
                    let commands = self.controller.selection_resolved(ticket, outcome);
                    self.apply(commands);
                } else {
                    let pos = self.timers.iter().position(|(due, _, _)| *due == next).unwrap();
                    let (_, timer, ticket) = self.timers.remove(pos);
                    let commands = self.controller.timer_fired(timer, ticket);
                    self.apply(commands);
                }
            }
            self.now_ms = until_ms;
        }

        fn phase(&self) -> SpinPhase {
            self.controller.phase()
        }
    }

    fn foods(labels: &[&str]) -> Vec<FoodItem> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    fn ocean_result(selected: &str, total: usize) -> SpinResult {
        SpinResult {
            selected_food: selected.to_string(),
            theme: ThemeSpec::new("Ocean", vec!["#111".into(), "#222".into()]),
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            total_options: total,
        }
    }

    #[test]
    fn test_early_response_is_held_until_dwell_elapses() {
        let mut host = SimulatedHost::new(SpinTimings::default());
        host.controller.set_foods(foods(&["Pizza", "Sushi", "Tacos", "Pasta"]));
        host.respond_with(1000, Ok(ocean_result("Sushi", 4)));

        host.spin();
        assert_eq!(host.phase(), SpinPhase::Spinning);
        assert_eq!(host.requests, vec![foods(&["Pizza", "Sushi", "Tacos", "Pasta"])]);

        host.advance_to(1000);
        assert_eq!(host.phase(), SpinPhase::Spinning);
        assert!(host.controller.result().is_none());
        assert!(host.controller.theme().is_none());

        host.advance_to(3999);
        assert_eq!(host.phase(), SpinPhase::Spinning);

        host.advance_to(4000);
        assert_eq!(host.phase(), SpinPhase::Revealing);
        assert!(!host.controller.show_result());

        host.advance_to(4499);
        assert_eq!(host.phase(), SpinPhase::Revealing);

        host.advance_to(4500);
        assert_eq!(host.phase(), SpinPhase::Result);
        assert!(host.controller.show_result());
        assert_eq!(host.controller.result().unwrap().selected_food, "Sushi");

        let face = host.controller.wheel_face(WheelDimensions::default());
        let colors: Vec<&str> = face.segments().iter().map(|s| s.fill_color.as_str()).collect();
        assert_eq!(colors, vec!["#111", "#222", "#111", "#222"]);
        assert!(host.controller.violations().is_empty());
    }

    #[test]
    fn test_late_response_extends_spinning() {
        let mut host = SimulatedHost::new(SpinTimings::default());
        host.controller.set_foods(foods(&["Ramen", "Pho"]));
        host.respond_with(6000, Ok(ocean_result("Pho", 2)));

        host.spin();
        host.advance_to(5999);
        assert_eq!(host.phase(), SpinPhase::Spinning);

        host.advance_to(6000);
        assert_eq!(host.phase(), SpinPhase::Revealing);
        host.advance_to(6500);
        assert_eq!(host.phase(), SpinPhase::Result);
    }

    #[test]
    fn test_empty_food_list_does_nothing() {
        let mut host = SimulatedHost::new(SpinTimings::default());
        let before = host.controller.rotation();
        host.spin();
        assert_eq!(host.phase(), SpinPhase::Idle);
        assert!(host.requests.is_empty());
        assert!(host.timers.is_empty());
        assert_eq!(host.controller.rotation(), before);
        assert!(host.controller.last_error().is_none());
    }

    #[test]
    fn test_spin_request_while_spinning_is_ignored() {
        let mut host = SimulatedHost::new(SpinTimings::default());
        host.controller.set_foods(foods(&["Burger", "Hot Dog"]));
        host.spin();
        let rotation = host.controller.rotation();
        assert_eq!(host.controller.in_flight_requests(), 1);

        assert!(host.controller.request_spin().is_empty());
        host.spin();
        assert_eq!(host.phase(), SpinPhase::Spinning);
        assert_eq!(host.controller.in_flight_requests(), 1);
        assert_eq!(host.requests.len(), 1);
        assert_eq!(host.controller.rotation(), rotation);
    }

    #[test]
    fn test_failed_request_returns_to_idle_without_result() {
        let mut host = SimulatedHost::new(SpinTimings::default());
        host.controller.set_foods(foods(&["Tacos", "Nachos"]));
        host.respond_with(300, Err(SpinError::Status(500)));

        host.spin();
        host.advance_to(300);
        assert_eq!(host.phase(), SpinPhase::Idle);
        assert!(host.controller.result().is_none());
        assert!(host.controller.theme().is_none());
        assert_eq!(host.controller.last_error(), Some(&SpinError::Status(500)));
        assert_eq!(host.controller.in_flight_requests(), 0);
        assert!(host.timers.is_empty());

        // the orphaned dwell timer can no longer move the phase
        host.advance_to(10_000);
        assert_eq!(host.phase(), SpinPhase::Idle);
    }

    #[test]
    fn test_failure_keeps_previous_theme() {
        let mut host = SimulatedHost::new(SpinTimings::default());
        host.controller.set_foods(foods(&["Pizza", "Sushi"]));
        host.respond_with(100, Ok(ocean_result("Pizza", 2)));
        host.spin();
        host.advance_to(4500);
        assert_eq!(host.controller.theme().unwrap().name, "Ocean");

        host.respond_with(100, Err(SpinError::Transport("connection reset".into())));
        host.spin();
        host.advance_to(5000);
        assert_eq!(host.phase(), SpinPhase::Idle);
        assert_eq!(host.controller.theme().unwrap().name, "Ocean");
    }

    #[test]
    fn test_rotation_never_decreases_across_spins() {
        let mut host = SimulatedHost::new(SpinTimings::default());
        host.controller.set_foods(foods(&["Cookies", "Donuts", "Pie"]));
        let mut last = host.controller.rotation();
        for round in 0..3u64 {
            host.respond_with(200, Ok(ocean_result("Pie", 3)));
            host.spin();
            let now = host.controller.rotation();
            assert_eq!(now - last, 1800.0);
            last = now;
            host.advance_to((round + 1) * 10_000);
            assert_eq!(host.phase(), SpinPhase::Result);
        }
    }

    #[test]
    fn test_spin_again_and_respin_from_result() {
        let mut host = SimulatedHost::new(SpinTimings::default());
        host.controller.set_foods(foods(&["Curry", "Pho"]));
        host.respond_with(100, Ok(ocean_result("Curry", 2)));
        host.spin();
        host.advance_to(4500);
        assert_eq!(host.phase(), SpinPhase::Result);

        host.controller.spin_again();
        assert_eq!(host.phase(), SpinPhase::Idle);
        assert!(host.controller.result().is_none());

        host.respond_with(100, Ok(ocean_result("Pho", 2)));
        host.spin();
        host.advance_to(9000);
        assert_eq!(host.phase(), SpinPhase::Result);

        // straight from Result into a new spin
        host.respond_with(100, Ok(ocean_result("Curry", 2)));
        host.spin();
        assert_eq!(host.phase(), SpinPhase::Spinning);
        assert!(host.controller.result().is_none());
        assert_eq!(host.requests.len(), 3);
    }

    #[test]
    fn test_changing_foods_dismisses_result() {
        let mut host = SimulatedHost::new(SpinTimings::default());
        host.controller.set_foods(foods(&["Gelato", "Tiramisu"]));
        host.respond_with(100, Ok(ocean_result("Gelato", 2)));
        host.spin();
        host.advance_to(4500);
        assert!(host.controller.show_result());

        host.controller.set_foods(foods(&["Risotto"]));
        assert_eq!(host.phase(), SpinPhase::Idle);
        assert!(!host.controller.show_result());
    }

    #[test]
    fn test_response_without_timeout_holds_spinning_indefinitely() {
        let mut host = SimulatedHost::new(SpinTimings::default());
        host.controller.set_foods(foods(&["Pancakes"]));
        host.spin();
        host.advance_to(600_000);
        assert_eq!(host.phase(), SpinPhase::Spinning);
        assert_eq!(host.controller.in_flight_requests(), 1);
    }

    #[test]
    fn test_request_timeout_aborts_spin() {
        let mut host = SimulatedHost::new(SpinTimings::default().with_request_timeout(8000));
        host.controller.set_foods(foods(&["Pancakes", "Waffles"]));
        host.respond_with(20_000, Ok(ocean_result("Waffles", 2)));
        host.spin();

        host.advance_to(7999);
        assert_eq!(host.phase(), SpinPhase::Spinning);
        host.advance_to(8000);
        assert_eq!(host.phase(), SpinPhase::Idle);
        assert_eq!(host.controller.last_error(), Some(&SpinError::Timeout));

        // the late answer is discarded
        host.advance_to(30_000);
        assert_eq!(host.phase(), SpinPhase::Idle);
        assert!(host.controller.result().is_none());
    }

    #[test]
    fn test_contract_violations_are_recorded_not_fatal() {
        let mut host = SimulatedHost::new(SpinTimings::default());
        host.controller.set_foods(foods(&["Pizza", "Sushi"]));
        let mut bogus = ocean_result("Lobster", 5);
        bogus.theme.colors.clear();
        host.respond_with(100, Ok(bogus));
        host.spin();
        host.advance_to(4500);

        assert_eq!(host.phase(), SpinPhase::Result);
        assert_eq!(host.controller.result().unwrap().selected_food, "Lobster");
        assert_eq!(host.controller.violations().len(), 3);
        // a color-less theme is never adopted
        assert!(host.controller.theme().is_none());
    }

    #[test]
    fn test_violations_only_describe_the_latest_spin() {
        let mut host = SimulatedHost::new(SpinTimings::default());
        host.controller.set_foods(foods(&["Pizza", "Sushi"]));
        host.respond_with(100, Ok(ocean_result("Lobster", 5)));
        host.spin();
        host.advance_to(4500);
        assert_eq!(host.controller.violations().len(), 2);

        host.respond_with(100, Ok(ocean_result("Sushi", 2)));
        host.spin();
        assert!(host.controller.violations().is_empty());
        host.advance_to(9000);
        assert_eq!(host.phase(), SpinPhase::Result);
        assert!(host.controller.violations().is_empty());
    }

    #[test]
    fn test_teardown_discards_outstanding_callbacks() {
        let mut host = SimulatedHost::new(SpinTimings::default());
        host.controller.set_foods(foods(&["Brownies", "Cupcakes"]));
        host.respond_with(1000, Ok(ocean_result("Cupcakes", 2)));
        host.spin();

        let stale_ticket = 1;
        let commands = host.controller.teardown();
        assert!(commands.contains(&SpinCommand::CancelTimer(SpinTimer::Dwell)));
        assert!(commands.contains(&SpinCommand::CancelTimer(SpinTimer::Reveal)));
        assert_eq!(host.phase(), SpinPhase::Idle);

        assert!(host
            .controller
            .selection_resolved(stale_ticket, Ok(ocean_result("Cupcakes", 2)))
            .is_empty());
        assert!(host.controller.timer_fired(SpinTimer::Dwell, stale_ticket).is_empty());
        assert_eq!(host.phase(), SpinPhase::Idle);
        assert!(host.controller.result().is_none());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(SpinError::Status(502).to_string(), "Selection service returned status 502");
        assert_eq!(SpinError::Timeout.to_string(), "Selection request timed out");
        let violation = ContractViolation::OptionCountMismatch { submitted: 4, reported: 3 };
        assert_eq!(violation.to_string(), "Submitted 4 options but the service reported 3");
    }
}
