use crate::components::{Header, Hero};
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        Header {}
        Hero {}
    }
}
