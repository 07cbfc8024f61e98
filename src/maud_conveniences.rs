use email_address::EmailAddress;
use maud::{Markup, Render, html};
use std::str::FromStr;

pub fn title(s: impl Render) -> Markup {
    html! {
        h1 class="text-3xl font-bold text-gray-100" {(s)}
    }
}

pub fn subtitle(s: impl Render) -> Markup {
    html! {
        h3 class="text-lg font-medium text-gray-100" {(s)}
    }
}

pub fn form_element(id: &'static str, label: &'static str, element: Markup) -> Markup {
    html! {
        div class="mb-4" {
            label for=(id) class="block text-sm font-bold mb-2 text-gray-300" {(label)}
            (element)
        }
    }
}

/// A labelled `required` input, pre-filled with `value`.
pub fn simple_form_element(
    id: &'static str,
    label: &'static str,
    ty: Option<&'static str>,
    placeholder: Option<&'static str>,
    value: &str,
) -> Markup {
    form_element(
        id,
        label,
        html! {
            input type=(ty.unwrap_or("text")) id=(id) name=(id) value=(value) placeholder=[placeholder] required
                class="shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600";
        },
    )
}

pub fn error_banner(message: &str) -> Markup {
    html! {
        div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert" {
            span {(message)}
        }
    }
}

pub fn spinner(caption: &'static str) -> Markup {
    html! {
        div class="text-center py-16" {
            div class="animate-spin rounded-full h-12 w-12 border-b-2 border-indigo-400 mx-auto" {}
            p class="mt-3 text-sm text-gray-400" {(caption)}
        }
    }
}

/// Renders an address as a `mailto:` link when it parses, plain text otherwise.
pub struct Email<'a>(pub &'a str);

impl Render for Email<'_> {
    fn render(&self) -> Markup {
        match EmailAddress::from_str(self.0) {
            Ok(address) => html! {
                a href=(address.to_uri()) class="break-all hover:text-blue-400 underline" {(address)}
            },
            Err(_) => html! {
                span class="break-all" {(self.0)}
            },
        }
    }
}
