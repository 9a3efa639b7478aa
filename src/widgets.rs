//! User interface components reused between views.

use hypertext::prelude::*;

/// Shown when a form submission is rejected. Every form in the app lives on
/// the admin page, so the alert always links back there.
pub struct FormError<S> {
    pub msg: S,
}

impl<S: ToString> Renderable for FormError<S> {
    fn render_to(
        &self,
        buffer: &mut hypertext::Buffer<hypertext::context::Node>,
    ) {
        maud!({
            div class="container mt-4" {
                div class="alert alert-danger" role="alert" {
                    (self.msg.to_string())
                }
                a href="/admin" { "Back to the admin page" }
            }
        })
        .render_to(buffer);
    }
}
