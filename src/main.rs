use anyhow::Result;
use locale_accessors::accessors::{
    AccessorNames, AccessorTable, Attributes, BaseAccessor, LocaleAccessors, Options,
};
use locale_accessors::config::Config;
use locale_accessors::diagnostics;
use locale_accessors::i18n::{Locale, LocaleRegistry, MetricsReport};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use tracing::info;

/// In-memory model storing one value per (attribute, locale).
#[derive(Default)]
struct Post {
    translations: HashMap<(String, Option<Locale>), Value>,
}

impl BaseAccessor for Post {
    fn get(&self, attribute: &str, options: &Options) -> Result<Value> {
        let key = (attribute.to_string(), options.locale.clone());
        Ok(self.translations.get(&key).cloned().unwrap_or(Value::Null))
    }

    fn predicate(&self, attribute: &str, options: &Options) -> Result<bool> {
        Ok(!self.get(attribute, options)?.is_null())
    }

    fn set(&mut self, attribute: &str, value: Value, options: &Options) -> Result<()> {
        let key = (attribute.to_string(), options.locale.clone());
        self.translations.insert(key, value);
        Ok(())
    }
}

#[derive(Serialize)]
struct Preview {
    operations: Vec<String>,
    values: HashMap<String, Value>,
    metrics: MetricsReport,
}

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    diagnostics::init_logging()?;

    let config = Config::from_env()?;
    let registry = LocaleRegistry::new(config.available_locales.clone());

    let mut table: AccessorTable<Post> = AccessorTable::new();
    let mut attributes = Attributes::new(&mut table, config.translated_attributes.clone());
    let applied = LocaleAccessors::apply(&mut attributes, &config.locale_accessors, &registry)?;

    if applied.is_empty() {
        info!("Locale accessors are disabled, nothing to preview");
    }

    // Write through every writer, then read back through every reader
    let mut post = Post::default();
    let mut values = HashMap::new();
    for synthesizer in &applied {
        for (locale, names) in synthesizer.locales().iter().zip(synthesizer.names()) {
            let AccessorNames { reader, writer, .. } = names;
            let sample = json!(format!("{} ({})", synthesizer.attribute(), locale));
            table.write(&mut post, &writer, sample, &Options::new())?;
            values.insert(reader.clone(), table.read(&post, &reader, &Options::new())?);
        }
    }

    let preview = Preview {
        operations: table.operation_names().into_iter().map(String::from).collect(),
        values,
        metrics: table.metrics().report(),
    };
    println!("{}", serde_json::to_string_pretty(&preview)?);

    Ok(())
}
