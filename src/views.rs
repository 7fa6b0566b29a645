use axum::response::IntoResponse;
use maud::{html, Markup, Render, DOCTYPE};

pub use footer::{Copyrights, Footer};

mod footer;

pub struct PageContent(Markup);

impl Render for PageContent {
    fn render(&self) -> Markup {
        self.0.render()
    }
}

pub struct Page {
    pub content: PageContent,
    pub footer: Footer,
}

impl Page {
    pub fn new(content: Markup, footer: Footer) -> Self {
        Self {
            content: PageContent(content),
            footer,
        }
    }
}

impl Render for Page {
    fn render(&self) -> Markup {
        html! {
          (DOCTYPE)
          html {
            head {
              meta charset="utf-8";
              title { "Copyright Footer" }
            }
            body {
              main {
                (self.content.render())
              }
              (self.footer.render())
            }
          }
        }
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> axum::response::Response {
        self.render().into_response()
    }
}
