use crate::renderer::components::*;
use crate::renderer::traits::*;

impl Render for Heading<'_> {
    fn render(&self, context: &RenderContext) -> Vec<String> {
        vec![format!(
            "{}\\{}{{{}}}\n\n",
            context.indent(),
            self.level.command(),
            self.title
        )]
    }
}

impl Render for BulletList<'_> {
    fn render(&self, context: &RenderContext) -> Vec<String> {
        let env = EnvironmentRenderer;
        let item_indent = context.nested().indent();

        let mut output = Vec::with_capacity(self.items.len() + 2);
        output.push(env.begin("itemize", None, context));
        for item in &self.items {
            output.push(format!("{}\\item {}\n", item_indent, item));
        }
        output.push(env.end("itemize", context));
        output
    }
}

impl Render for Column<'_> {
    fn render(&self, context: &RenderContext) -> Vec<String> {
        let env = EnvironmentRenderer;
        let width = format!("{}\\textwidth", self.width);

        let mut output = vec![env.begin("column", Some(width.as_str()), context)];
        match &self.content {
            Some(list) => output.extend(list.render(&context.nested())),
            None => output.push(format!("{}\n", context.nested().indent())),
        }
        output.push(env.end("column", context));
        output
    }
}

impl Render for Frame<'_> {
    fn render(&self, context: &RenderContext) -> Vec<String> {
        let env = EnvironmentRenderer;
        let body_context = context.nested();

        let mut output = vec![env.begin("frame", Some(self.title), context)];

        match self.layout {
            FrameLayout::OneColumn => {
                output.extend(BulletList::from_note(self.note).render(&body_context));
            }
            FrameLayout::TwoColumn => {
                output.push(env.begin("columns", None, &body_context));
                for column in self.columns() {
                    output.extend(column.render(&body_context.nested()));
                }
                output.push(env.end("columns", &body_context));
            }
        }

        // Blank line separates consecutive frames
        let mut close = env.end("frame", context);
        close.push('\n');
        output.push(close);
        output
    }
}
