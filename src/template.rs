//! Templating code.
//!
//! This defines the [`Page`] item, which every rendered view is wrapped in.

use hypertext::prelude::*;

pub struct Page<R1: Renderable, R2: Renderable> {
    body: Option<R1>,
    extra_head: Option<R2>,
}

// unfortunate generic argument shenanigans
impl<R1: Renderable> Page<R1, String> {
    pub fn new() -> Self {
        Default::default()
    }
}

impl<R1: Renderable, R2: Renderable> Page<R1, R2> {
    pub fn body(mut self, body: R1) -> Self {
        self.body = Some(body);
        self
    }

    pub fn extra_head<R3: Renderable>(self, content: R3) -> Page<R1, R3> {
        Page {
            body: self.body,
            extra_head: Some(content),
        }
    }
}

impl<R1: Renderable, R2: Renderable> Renderable for Page<R1, R2> {
    fn render_to(
        &self,
        buffer: &mut hypertext::Buffer<hypertext::context::Node>,
    ) {
        maud! {
            html {
                head {
                    title { "Tallyboard" }
                    link
                        href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css"
                        rel="stylesheet"
                        integrity="sha384-QWTKZyjpPEjISv5WaRU9OFeRpok6YctnYmDr5pNlyT2bRjXh0JMhjY6hW+ALEwIH"
                        crossorigin="anonymous";
                    meta
                        name="viewport"
                        content="width=device-width, initial-scale=1";
                    @if let Some(extra) = &self.extra_head {
                        (extra)
                    }
                }
                body class="d-flex flex-column vh-100" {
                    nav class="navbar navbar-expand"
                        style="background-color: #2d5a3d;"
                        data-bs-theme="dark" {
                        div class="container-fluid" {
                            a class="navbar-brand text-white" href="/" {
                                "Tallyboard"
                            }
                            ul class="navbar-nav" style="display: flex; gap: 1rem;" data-bs-theme="dark" {
                                li class="nav-item" {
                                    a class="nav-link text-white" href="/" {
                                        "Leaderboard"
                                    }
                                }
                                li class="nav-item" {
                                    a class="nav-link text-white" href="/admin" {
                                        "Admin"
                                    }
                                }
                            }
                        }
                    }
                    div class="flex-grow-1" {
                        @if let Some(body) = &self.body {
                            (body)
                        }
                    }
                }
            }
        }
        .render_to(buffer)
    }
}

impl<R1: Renderable, R2: Renderable> Default for Page<R1, R2> {
    fn default() -> Self {
        Self {
            body: Default::default(),
            extra_head: Default::default(),
        }
    }
}
