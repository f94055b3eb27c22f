//! Lua VM construction with a reduced capability surface.
//!
//! Only the pure libraries are opened (`string`, `table`, `math`, `utf8`).
//! `io`, `os`, `package` and `debug` are never loaded. The base-library
//! entry points that reach the filesystem, compile new chunks or write to the
//! host's stdout are removed. `pcall` and `xpcall` are removed as well, so
//! the deadline error raised by the hook always unwinds the whole script.
//!
//! The deadline hook runs between VM instructions. A single long-running
//! library call (a pathological `string.find` pattern, say) is not
//! interrupted until it returns; the memory limit bounds what it can build.

use mlua::prelude::*;
use mlua::{HookTriggers, StdLib, VmState};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// Base-library globals removed after the VM is created.
pub const REMOVED_GLOBALS: &[&str] = &[
    "dofile",
    "loadfile",
    "load",
    "require",
    "collectgarbage",
    "print",
    "pcall",
    "xpcall",
];

/// Message raised inside the VM when the deadline passes.
pub(crate) const DEADLINE_MESSAGE: &str = "script deadline exceeded";

/// Create a fresh VM for a single script.
pub fn create_sandboxed_vm(memory_limit: usize) -> LuaResult<Lua> {
    let lua = Lua::new_with(
        StdLib::STRING | StdLib::TABLE | StdLib::MATH | StdLib::UTF8,
        LuaOptions::default(),
    )?;
    lua.set_memory_limit(memory_limit)?;

    let globals = lua.globals();
    for name in REMOVED_GLOBALS {
        globals.set(*name, LuaValue::Nil)?;
    }
    Ok(lua)
}

/// Install an instruction-count hook that aborts the script after `deadline`.
///
/// The returned flag is set when the hook fired, so the caller can tell a
/// timeout apart from an ordinary runtime error.
pub fn install_deadline(
    lua: &Lua,
    deadline: Instant,
    instruction_interval: u32,
) -> Arc<AtomicBool> {
    let timed_out = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&timed_out);
    lua.set_hook(
        HookTriggers::new().every_nth_instruction(instruction_interval),
        move |_lua, _debug| {
            if Instant::now() >= deadline {
                flag.store(true, Ordering::SeqCst);
                return Err(LuaError::runtime(DEADLINE_MESSAGE));
            }
            Ok(VmState::Continue)
        },
    );
    timed_out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const LIMIT: usize = 16 * 1024 * 1024;

    #[test]
    fn test_dangerous_libraries_absent() {
        let lua = create_sandboxed_vm(LIMIT).unwrap();
        for name in ["io", "os", "package", "debug"] {
            let value: LuaValue = lua.globals().get(name).unwrap();
            assert_eq!(value, LuaValue::Nil, "{name} should not be loaded");
        }
    }

    #[test]
    fn test_removed_globals_are_nil() {
        let lua = create_sandboxed_vm(LIMIT).unwrap();
        for name in REMOVED_GLOBALS {
            let value: LuaValue = lua.globals().get(*name).unwrap();
            assert_eq!(value, LuaValue::Nil, "{name} should be removed");
        }
        for name in ["print", "pcall", "xpcall"] {
            assert!(REMOVED_GLOBALS.contains(&name), "{name} should be listed");
        }
    }

    #[test]
    fn test_print_does_not_reach_host() {
        let lua = create_sandboxed_vm(LIMIT).unwrap();
        let result = lua.load("print('flood')").exec();
        assert!(result.is_err());
    }

    #[test]
    fn test_protected_calls_unavailable() {
        let lua = create_sandboxed_vm(LIMIT).unwrap();
        let timed_out = install_deadline(&lua, Instant::now() + Duration::from_millis(50), 1000);
        let started = Instant::now();

        let result = lua
            .load("local ok = pcall(function() while true do end end) while true do end")
            .exec();

        assert!(result.is_err());
        assert!(started.elapsed() < Duration::from_secs(1));
        assert!(!timed_out.load(Ordering::SeqCst));
    }

    #[test]
    fn test_deadline_unwinds_through_library_callbacks() {
        let lua = create_sandboxed_vm(LIMIT).unwrap();
        let timed_out = install_deadline(&lua, Instant::now() + Duration::from_millis(50), 1000);

        let result = lua
            .load("string.gsub('a', 'a', function() while true do end end)")
            .exec();

        assert!(result.is_err());
        assert!(timed_out.load(Ordering::SeqCst));
    }

    #[test]
    fn test_preserves_pure_libraries() {
        let lua = create_sandboxed_vm(LIMIT).unwrap();

        let result: String = lua.load("string.upper('hello')").eval().unwrap();
        assert_eq!(result, "HELLO");

        let result: String = lua
            .load("table.concat({'a', 'b', 'c'}, ', ')")
            .eval()
            .unwrap();
        assert_eq!(result, "a, b, c");

        let result: i64 = lua.load("math.max(3, 7, 5)").eval().unwrap();
        assert_eq!(result, 7);
    }

    #[test]
    fn test_calling_removed_global_fails() {
        let lua = create_sandboxed_vm(LIMIT).unwrap();
        let result = lua.load("return loadfile('/etc/passwd')").eval::<LuaValue>();
        assert!(result.is_err());
    }

    #[test]
    fn test_memory_limit_enforced() {
        let lua = create_sandboxed_vm(1024 * 1024).unwrap();
        let result = lua
            .load("local t = {} for i = 1, 1e7 do t[i] = i end")
            .exec();
        assert!(matches!(result, Err(LuaError::MemoryError(_))));
    }

    #[test]
    fn test_deadline_hook_stops_infinite_loop() {
        let lua = create_sandboxed_vm(LIMIT).unwrap();
        let timed_out = install_deadline(&lua, Instant::now() + Duration::from_millis(50), 1000);

        let result = lua.load("while true do end").exec();

        assert!(result.is_err());
        assert!(timed_out.load(Ordering::SeqCst));
    }

    #[test]
    fn test_deadline_hook_quiet_for_short_script() {
        let lua = create_sandboxed_vm(LIMIT).unwrap();
        let timed_out = install_deadline(&lua, Instant::now() + Duration::from_secs(5), 1000);

        let sum: i64 = lua
            .load("local s = 0 for i = 1, 100 do s = s + i end return s")
            .eval()
            .unwrap();

        assert_eq!(sum, 5050);
        assert!(!timed_out.load(Ordering::SeqCst));
    }
}
