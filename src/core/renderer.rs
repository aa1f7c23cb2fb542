use crate::config::script::{Script, Step};
use crate::domain::model::{Employee, Person};
use crate::domain::ports::Render;
use crate::utils::error::Result;
use std::io::Write;

pub struct RecordRenderer<W: Write> {
    out: W,
}

impl<W: Write> RecordRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Runs every step of `script` in order, flushing after each one.
    pub fn run(&mut self, script: &Script) -> Result<()> {
        // Counters only exist for the duration of a run.
        struct Simple {
            value: i32,
        }

        impl Simple {
            fn new(value: i32) -> Self {
                Self { value }
            }

            fn view<O: Write>(&self, out: &mut O) -> std::io::Result<()> {
                write!(out, "{}", self.value)?;
                out.flush()
            }
        }

        tracing::debug!(
            "Rendering script '{}' ({} steps)",
            script.script.name,
            script.steps.len()
        );

        for (index, step) in script.steps.iter().enumerate() {
            tracing::debug!("Step {}: {:?}", index + 1, step);
            match step {
                Step::Person { name, age } => {
                    Person::new(name.as_str(), *age).render(&mut self.out)?
                }
                Step::Employee { name, role } => {
                    Employee::new(name.as_str(), role.as_str()).render(&mut self.out)?
                }
                Step::Counter { value } => Simple::new(*value).view(&mut self.out)?,
            }
        }

        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
