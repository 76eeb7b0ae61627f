use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use shared::wheel_geometry::{WheelDimensions, WheelFace};
use shared::wheel_palette::accent_color;
use shared::{
    FoodItem, SpinCommand, SpinController, SpinError, SpinPhase, SpinResult, SpinTimer,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::post_spin;
use crate::config::spin_timings;

/// Owns the controller together with the live timer handles, keyed by timer.
/// Dropping a handle clears its timeout, so removing an entry cancels it.
struct SpinDriver<R, H> {
    controller: SpinController<R>,
    timers: HashMap<SpinTimer, H>,
    disposed: bool,
}

impl<R: Rng, H> SpinDriver<R, H> {
    fn new(controller: SpinController<R>) -> Self {
        Self {
            controller,
            timers: HashMap::new(),
            disposed: false,
        }
    }

    /// Handles cancellations in place and hands back what the host must start
    fn apply(&mut self, commands: Vec<SpinCommand>) -> Vec<SpinCommand> {
        let mut pending = Vec::new();
        for command in commands {
            match command {
                SpinCommand::CancelTimer(timer) => {
                    self.timers.remove(&timer);
                }
                other => pending.push(other),
            }
        }
        pending
    }

    /// Stores a started timer. A previous handle for the same timer is dropped.
    fn arm(&mut self, timer: SpinTimer, handle: H) {
        self.timers.insert(timer, handle);
    }

    fn timer_fired(&mut self, timer: SpinTimer, ticket: u64) -> Option<Vec<SpinCommand>> {
        if self.disposed {
            return None;
        }
        let commands = self.controller.timer_fired(timer, ticket);
        Some(self.apply(commands))
    }

    fn selection_resolved(
        &mut self,
        ticket: u64,
        outcome: Result<SpinResult, SpinError>,
    ) -> Option<Vec<SpinCommand>> {
        if self.disposed {
            return None;
        }
        let commands = self.controller.selection_resolved(ticket, outcome);
        Some(self.apply(commands))
    }

    fn dispose(&mut self) {
        self.disposed = true;
        let commands = self.controller.teardown();
        let leftover = self.apply(commands);
        if !leftover.is_empty() {
            log::warn!("Teardown asked for {} new commands, ignoring", leftover.len());
        }
    }
}

type SharedDriver = Rc<RefCell<SpinDriver<SmallRng, Timeout>>>;

fn execute(driver: &SharedDriver, pending: Vec<SpinCommand>, refresh: &UseForceUpdateHandle) {
    for command in pending {
        match command {
            SpinCommand::StartTimer { timer, ticket, delay_ms } => {
                let handle = {
                    let driver = driver.clone();
                    let refresh = refresh.clone();
                    Timeout::new(delay_ms, move || {
                        let next = driver.borrow_mut().timer_fired(timer, ticket);
                        if let Some(next) = next {
                            execute(&driver, next, &refresh);
                            refresh.force_update();
                        }
                    })
                };
                driver.borrow_mut().arm(timer, handle);
            }
            SpinCommand::RequestSelection { ticket, foods } => {
                let driver = driver.clone();
                let refresh = refresh.clone();
                spawn_local(async move {
                    let outcome = post_spin(&foods).await;
                    let next = driver.borrow_mut().selection_resolved(ticket, outcome);
                    if let Some(next) = next {
                        execute(&driver, next, &refresh);
                        refresh.force_update();
                    }
                });
            }
            SpinCommand::CancelTimer(_) => {}
        }
    }
}

/// Render-ready snapshot of the controller
#[derive(Clone, PartialEq)]
pub struct SpinView {
    pub phase: SpinPhase,
    pub foods: Vec<FoodItem>,
    pub rotation: f64,
    pub face: WheelFace,
    pub background: String,
    pub accent: String,
    pub result: Option<SpinResult>,
    pub show_result: bool,
    pub can_spin: bool,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct SpinHandle {
    driver: SharedDriver,
    refresh: UseForceUpdateHandle,
}

impl PartialEq for SpinHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.driver, &other.driver)
    }
}

impl SpinHandle {
    pub fn spin(&self) {
        let pending = {
            let mut driver = self.driver.borrow_mut();
            let commands = driver.controller.request_spin();
            driver.apply(commands)
        };
        execute(&self.driver, pending, &self.refresh);
        self.refresh.force_update();
    }

    pub fn spin_again(&self) {
        self.driver.borrow_mut().controller.spin_again();
        self.refresh.force_update();
    }

    pub fn set_foods(&self, foods: Vec<FoodItem>) {
        self.driver.borrow_mut().controller.set_foods(foods);
        self.refresh.force_update();
    }

    pub fn view(&self, dims: WheelDimensions) -> SpinView {
        let state = self.driver.borrow();
        let controller = &state.controller;
        SpinView {
            phase: controller.phase(),
            foods: controller.foods().to_vec(),
            rotation: controller.rotation(),
            face: controller.wheel_face(dims),
            background: controller.background().to_string(),
            accent: accent_color(controller.theme()).to_string(),
            result: controller.result().cloned(),
            show_result: controller.show_result(),
            can_spin: controller.can_spin(),
            error: controller.last_error().map(|e| e.to_string()),
        }
    }
}

/// One spin controller per mounted page. Unmounting cancels every pending
/// timer and makes late network responses no-ops.
#[hook]
pub fn use_spin_controller() -> SpinHandle {
    let driver = use_mut_ref(|| {
        SpinDriver::new(SpinController::with_timings(spin_timings(), SmallRng::from_entropy()))
    });
    let refresh = use_force_update();

    {
        let driver = driver.clone();
        use_effect_with((), move |_| {
            move || driver.borrow_mut().dispose()
        });
    }

    SpinHandle { driver, refresh }
}
