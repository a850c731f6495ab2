/// Builder for registry YAML payloads used in domain and app unit tests.
///
/// Starts from a valid registry: one mirror, a `wget` command, dataset `d1`
/// and benchmark `b1` linked to it.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct RegistryYamlBuilder {
    mirrors: Option<Vec<String>>,
    commands: Option<Vec<(String, String)>>,
    directories: Option<(String, String, String)>,
    datasets: Option<Vec<(String, Vec<(String, String)>)>>,
    benchmarks: Option<Vec<(String, Vec<(String, String)>)>>,
}

impl Default for RegistryYamlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegistryYamlBuilder {
    pub fn new() -> Self {
        Self {
            mirrors: Some(vec!["https://mirror.example.org".to_string()]),
            commands: Some(vec![("wget".to_string(), "\"wget {url} -P {dir}\"".to_string())]),
            directories: None,
            datasets: Some(vec![(
                "d1".to_string(),
                vec![("end_point".to_string(), "\"http://example.org/d1\"".to_string())],
            )]),
            benchmarks: Some(vec![(
                "b1".to_string(),
                vec![("datasets".to_string(), "d1".to_string())],
            )]),
        }
    }

    pub fn without_mirrors(mut self) -> Self {
        self.mirrors = None;
        self
    }

    pub fn without_commands(mut self) -> Self {
        self.commands = None;
        self
    }

    pub fn without_datasets(mut self) -> Self {
        self.datasets = None;
        self
    }

    pub fn without_benchmarks(mut self) -> Self {
        self.benchmarks = None;
        self
    }

    pub fn command(mut self, name: &str, template: &str) -> Self {
        upsert(self.commands.get_or_insert_with(Vec::new), name, format!("\"{}\"", template));
        self
    }

    pub fn directories(mut self, dataset: &str, output: &str, models: &str) -> Self {
        self.directories = Some((dataset.into(), output.into(), models.into()));
        self
    }

    /// Add or replace a dataset.
    pub fn dataset(mut self, name: &str, end_point: &str, command: Option<&str>) -> Self {
        let mut fields = vec![("end_point".to_string(), format!("\"{}\"", end_point))];
        if let Some(command) = command {
            fields.push(("download_command".to_string(), command.to_string()));
        }
        upsert(self.datasets.get_or_insert_with(Vec::new), name, fields);
        self
    }

    /// Set one raw YAML field on a benchmark, creating the benchmark if needed.
    pub fn benchmark_field(mut self, name: &str, key: &str, raw_value: &str) -> Self {
        let benchmarks = self.benchmarks.get_or_insert_with(Vec::new);
        if !benchmarks.iter().any(|(bench, _)| bench == name) {
            benchmarks.push((name.to_string(), Vec::new()));
        }
        if let Some((_, fields)) = benchmarks.iter_mut().find(|(bench, _)| bench == name) {
            upsert(fields, key, raw_value.to_string());
        }
        self
    }

    pub fn build(self) -> String {
        let mut out = String::new();

        if let Some(mirrors) = self.mirrors {
            out.push_str("data_mirrors:\n");
            for mirror in mirrors {
                out.push_str(&format!("  - \"{}\"\n", mirror));
            }
        }
        if let Some(commands) = self.commands {
            out.push_str("download_commands:\n");
            for (name, template) in commands {
                out.push_str(&format!("  {}: {}\n", name, template));
            }
        }
        if let Some((dataset, output, models)) = self.directories {
            out.push_str("directories:\n");
            out.push_str(&format!("  dataset_root_dir: \"{}\"\n", dataset));
            out.push_str(&format!("  output_root_dir: \"{}\"\n", output));
            out.push_str(&format!("  models_dir: \"{}\"\n", models));
        }
        push_entries(&mut out, "datasets", self.datasets);
        push_entries(&mut out, "benchmarks", self.benchmarks);
        out
    }
}

fn upsert<V>(entries: &mut Vec<(String, V)>, key: &str, value: V) {
    match entries.iter_mut().find(|(name, _)| name == key) {
        Some(entry) => entry.1 = value,
        None => entries.push((key.to_string(), value)),
    }
}

type Entries = Vec<(String, Vec<(String, String)>)>;

fn push_entries(out: &mut String, section: &str, entries: Option<Entries>) {
    let Some(entries) = entries else {
        return;
    };
    out.push_str(&format!("{}:\n", section));
    for (name, fields) in entries {
        if fields.is_empty() {
            out.push_str(&format!("  {}: {{}}\n", name));
            continue;
        }
        out.push_str(&format!("  {}:\n", name));
        for (key, value) in fields {
            out.push_str(&format!("    {}: {}\n", key, value));
        }
    }
}
