use crate::systems::TurnContext;

pub trait System {
    fn name(&self) -> &'static str;
    fn process(&mut self, ctx: &mut TurnContext<'_>);
}

struct Registered {
    priority: i32,
    system: Box<dyn System>,
}

/// Runs registered systems in descending priority. Systems sharing a
/// priority keep their registration order.
#[derive(Default)]
pub struct Scheduler {
    systems: Vec<Registered>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_system(&mut self, system: Box<dyn System>, priority: i32) {
        let index = self
            .systems
            .iter()
            .position(|entry| entry.priority < priority)
            .unwrap_or(self.systems.len());
        self.systems.insert(index, Registered { priority, system });
    }

    pub fn system_names(&self) -> Vec<&'static str> {
        self.systems.iter().map(|entry| entry.system.name()).collect()
    }

    pub fn run_excluding(&mut self, ctx: &mut TurnContext<'_>, excluded: &[&str]) {
        for entry in &mut self.systems {
            if excluded.contains(&entry.system.name()) {
                continue;
            }
            entry.system.process(ctx);
        }
    }

    pub fn run_only(&mut self, ctx: &mut TurnContext<'_>, name: &str) -> bool {
        let Some(entry) = self.systems.iter_mut().find(|entry| entry.system.name() == name) else {
            return false;
        };
        entry.system.process(ctx);
        true
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::systems::test_support::TurnFixture;

    type Trace = Rc<RefCell<Vec<&'static str>>>;

    struct Recorder {
        name: &'static str,
        trace: Trace,
    }

    impl System for Recorder {
        fn name(&self) -> &'static str {
            self.name
        }

        fn process(&mut self, _ctx: &mut TurnContext<'_>) {
            self.trace.borrow_mut().push(self.name);
        }
    }

    fn recorder(name: &'static str, trace: &Trace) -> Box<dyn System> {
        Box::new(Recorder { name, trace: Rc::clone(trace) })
    }

    #[test]
    fn higher_priority_runs_first_and_ties_keep_registration_order() {
        let trace = Trace::default();
        let mut scheduler = Scheduler::new();
        scheduler.add_system(recorder("low", &trace), 0);
        scheduler.add_system(recorder("high", &trace), 10);
        scheduler.add_system(recorder("mid_a", &trace), 5);
        scheduler.add_system(recorder("mid_b", &trace), 5);

        assert_eq!(scheduler.system_names(), vec!["high", "mid_a", "mid_b", "low"]);

        let mut fixture = TurnFixture::open_room(10, 10);
        let mut ctx = fixture.context(None);
        scheduler.run_excluding(&mut ctx, &["mid_b"]);
        assert_eq!(*trace.borrow(), vec!["high", "mid_a", "low"]);
    }

    #[test]
    fn run_only_reports_unknown_systems() {
        let trace = Trace::default();
        let mut scheduler = Scheduler::new();
        scheduler.add_system(recorder("render", &trace), 0);

        let mut fixture = TurnFixture::open_room(10, 10);
        let mut ctx = fixture.context(None);
        assert!(scheduler.run_only(&mut ctx, "render"));
        assert!(!scheduler.run_only(&mut ctx, "missing"));
        assert_eq!(*trace.borrow(), vec!["render"]);
    }
}
