use recnik_config::Config;
use recnik_core::Glossary;

pub struct AppState {
    pub config: Config,
    pub glossary: Glossary,
}
