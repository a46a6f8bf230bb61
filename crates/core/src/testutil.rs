//! Shared test doubles for the build stages

use std::cell::RefCell;
use std::path::Path;

use stagehook_platform::{CommandRunner, PlatformError, ProcessOutput};

/// One recorded toolchain invocation.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

/// Scripted `CommandRunner` for stage tests.
///
/// Records every invocation in order, optionally fails one program by name,
/// and optionally runs a side effect when `make` is invoked so tests can lay
/// down build outputs the way the real toolchain would.
pub struct FakeRunner {
    calls: RefCell<Vec<Invocation>>,
    fail_program: Option<&'static str>,
    on_make: Option<Box<dyn Fn()>>,
}

impl FakeRunner {
    /// Runner where every invocation succeeds and does nothing.
    pub fn ok() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_program: None,
            on_make: None,
        }
    }

    /// Runner where `program` exits non-zero and everything else succeeds.
    pub fn failing(program: &'static str) -> Self {
        Self {
            fail_program: Some(program),
            ..Self::ok()
        }
    }

    /// Runner that executes `effect` whenever `make` is invoked.
    pub fn with_make_effect(effect: impl Fn() + 'static) -> Self {
        Self {
            on_make: Some(Box::new(effect)),
            ..Self::ok()
        }
    }

    /// Programs invoked so far, in order.
    pub fn programs(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.program.clone()).collect()
    }

    /// All recorded invocations.
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[String], _cwd: &Path) -> Result<ProcessOutput, PlatformError> {
        self.calls.borrow_mut().push(Invocation {
            program: program.to_string(),
            args: args.to_vec(),
        });

        if self.fail_program == Some(program) {
            return Ok(ProcessOutput {
                code: Some(2),
                stdout: String::new(),
                stderr: format!("{program}: simulated failure"),
            });
        }

        if program == "make"
            && let Some(effect) = &self.on_make
        {
            effect();
        }

        Ok(ProcessOutput {
            code: Some(0),
            stdout: String::new(),
            stderr: String::new(),
        })
    }
}
