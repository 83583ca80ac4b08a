use std::{env, error::Error, fs, io};
use ui_builder::{Bootstrap5, Bulma, ButtonFlags, UiBuilder, config::RenderOptions};

fn sign_in<B: UiBuilder>(ui: &mut B) -> Result<(), Box<dyn Error>> {
    ui.breadcrumb(())
        .breadcrumb_item(())
        .a(("Home", [("href", "/")]))
        .end()?
        .end()?
        .breadcrumb_item("Sign in")
        .end()?
        .end()?;

    ui.panel("default", ())
        .panel_header("Sign in")
        .end()?
        .panel_body(())
        .form(true, false, [("method", "post")])
        .form_row(())
        .form_col(4, ())
        .call("formLabel", ("Email", [("for", "email")]))?
        .end()?
        .end()?
        .form_col(8, ())
        .input_group(())
        .text("@")
        .end()?
        .call("formInput", [("id", "email"), ("name", "email")])?
        .end_shorted()?
        .end()?
        .end()?
        .end()?
        .form_row(())
        .checkbox(false, [("id", "remember")])
        .end_shorted()?
        .call("formLabel", ("Remember me", [("for", "remember")]))?
        .end()?
        .end()?
        .button(ButtonFlags::PRIMARY | ButtonFlags::FULL_WIDTH, [("type", "submit")])
        .add_icon("box-arrow-in-right")
        .add_text(" Sign in")
        .end()?
        .end()?
        .end()?
        .end()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let options = match fs::read_to_string("ui_builder.toml") {
        Ok(s) => toml::from_str(&s)?,
        Err(error) => {
            if error.kind() == io::ErrorKind::NotFound {
                RenderOptions::default()
            } else {
                return Err(Box::new(error));
            }
        }
    };

    let html = match env::args().nth(1).as_deref() {
        Some("bulma") => {
            let mut ui = Bulma::new();
            sign_in(&mut ui)?;
            ui.build_with(&options)?
        }
        _ => {
            let mut ui = Bootstrap5::new();
            sign_in(&mut ui)?;
            ui.build_with(&options)?
        }
    };
    println!("{html}");
    Ok(())
}
