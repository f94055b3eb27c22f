//! Turns a script's return value into the text shown to the student.
//!
//! Tables become pretty-printed JSON with sorted keys; everything else uses
//! Lua's own textual form.

use mlua::prelude::*;

pub fn render_value(lua: &Lua, value: LuaValue) -> LuaResult<String> {
    match value {
        LuaValue::Nil => Ok("nil".to_string()),
        LuaValue::Boolean(b) => Ok(b.to_string()),
        LuaValue::Integer(i) => Ok(i.to_string()),
        LuaValue::Number(n) => Ok(render_number(n)),
        LuaValue::String(s) => Ok(s.to_string_lossy()),
        LuaValue::Table(_) => {
            let options = LuaDeserializeOptions::new()
                .sort_keys(true)
                .deny_unsupported_types(false);
            let json: serde_json::Value = lua.from_value_with(value, options)?;
            serde_json::to_string_pretty(&json).map_err(LuaError::external)
        }
        other => Ok(format!("<{}>", other.type_name())),
    }
}

/// Floats keep a fractional part so `4.0` is not confused with `4`.
fn render_number(n: f64) -> String {
    if n.is_nan() {
        "nan".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "inf" } else { "-inf" }.to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{n:.1}")
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(source: &str) -> String {
        let lua = Lua::new();
        let value: LuaValue = lua.load(source).eval().unwrap();
        render_value(&lua, value).unwrap()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(render("return 2 + 2"), "4");
        assert_eq!(render("return 10 / 4"), "2.5");
        assert_eq!(render("return 8 / 2"), "4.0");
        assert_eq!(render("return 'hello'"), "hello");
        assert_eq!(render("return true"), "true");
        assert_eq!(render("return nil"), "nil");
    }

    #[test]
    fn test_no_return_value_is_nil() {
        assert_eq!(render("local x = 1"), "nil");
    }

    #[test]
    fn test_table_pretty_json_sorted() {
        let text = render("return { name = 'cube', edges = 12 }");
        assert_eq!(text, "{\n  \"edges\": 12,\n  \"name\": \"cube\"\n}");
    }

    #[test]
    fn test_sequence_renders_as_array() {
        let text = render("return { 1, 2, 3 }");
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_function_renders_type_name() {
        assert_eq!(render("return function() end"), "<function>");
    }
}
