//! HTML templates
//!
//! Templates are compiled into the binary. Names ending in `.html`
//! are auto-escaped by minijinja.

use minijinja::Environment;

pub const INDEX: &str = "index.html";

pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template(INDEX, include_str!("../templates/index.html"))?;
    Ok(env)
}
