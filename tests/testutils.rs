use std::ops::Deref;
use std::panic::{self, UnwindSafe};
use std::sync::Once;

use libtest_mimic::Failed;

use tagwalk::testutils::{take_output, trace_log};

/// Run a test case, reporting everything the tree walker logged if it panics.
///
/// Because custom test harnesses in Rust do not support capturing of stdout, the walker logs into
/// its own buffer (see `tagwalk::testutils::OUTPUT`), which we attach to the failure message here.
/// Failures also get a backtrace, as libtest_mimic does not capture any.
pub fn catch_unwind_and_report(f: impl FnOnce() + UnwindSafe) -> Result<(), Failed> {
    static PANIC_HOOK: Once = Once::new();
    PANIC_HOOK.call_once(|| {
        panic::set_hook(Box::new(|_info| {
            let backtrace = std::backtrace::Backtrace::capture();
            trace_log(&format!("\nPANIC BACKTRACE:\n{}", backtrace));
        }));
    });

    let result = panic::catch_unwind(f);
    let mut msg = take_output();

    match result {
        Ok(_) => Ok(()),
        Err(e) => {
            msg.push('\n');
            if let Some(s) = e
                // Try to convert it to a String, then turn that into a str
                .downcast_ref::<String>()
                .map(String::as_str)
                // If that fails, try to turn it into a &'static str
                .or_else(|| e.downcast_ref::<&'static str>().map(Deref::deref))
            {
                msg.push_str("PANIC: ");
                msg.push_str(s);
            }

            Err(msg.into())
        }
    }
}
