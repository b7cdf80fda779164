use tera::{Context, Tera};

use crate::error::AppResult;

/// Page templates compiled into the binary.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn new() -> AppResult<Self> {
        let mut tera = Tera::default();
        // base 模板需要先于子模板加载
        tera.add_raw_templates(vec![
            ("base.html", include_str!("../../templates/base.html")),
            ("todo/chip_input.html", include_str!("../../templates/todo/chip_input.html")),
            ("todo/fields.html", include_str!("../../templates/todo/fields.html")),
            ("todo/page.html", include_str!("../../templates/todo/page.html")),
        ])?;
        Ok(Self { tera })
    }

    pub fn render(&self, template: &str, context: &Context) -> AppResult<String> {
        Ok(self.tera.render(template, context)?)
    }
}
