use crate::{
    api::client::StudentsClient,
    config::{RuntimeConfiguration, date_locale::DateLocaleConfig},
    directory::Directory,
    error::DirectoryResult,
};
use maud::{DOCTYPE, Markup, html};
use std::{ops::Deref, sync::Arc};

#[derive(Clone, Debug)]
pub struct DirectoryState {
    directory: Arc<Directory<StudentsClient>>,
    config: RuntimeConfiguration,
}

impl DirectoryState {
    pub fn new(config: RuntimeConfiguration) -> DirectoryResult<Self> {
        let client = StudentsClient::new(config.api_config())?;

        Ok(Self {
            directory: Arc::new(Directory::new(client)),
            config,
        })
    }

    pub fn config(&self) -> &RuntimeConfiguration {
        &self.config
    }

    pub fn dates(&self) -> Arc<DateLocaleConfig> {
        self.config.date_locale_config()
    }

    #[allow(clippy::unused_self, clippy::needless_pass_by_value)]
    pub fn render(&self, markup: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://unpkg.com/htmx.org@2.0.4" integrity="sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+" crossorigin="anonymous" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    title { "Students" }
                }
                body class="bg-gray-900 min-h-screen text-white py-8" {
                    main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8" {
                        (markup)
                    }
                }
            }
        }
    }
}

impl Deref for DirectoryState {
    type Target = Directory<StudentsClient>;

    fn deref(&self) -> &Self::Target {
        &self.directory
    }
}
