use pacrunch_domain::Dataset;
use rustc_hash::FxHashSet;

/// Remove the named columns. Unknown names are ignored and repeated names
/// count once.
pub fn drop_columns(dataset: &mut Dataset, names: &[String]) -> Vec<String> {
    let targets: FxHashSet<&str> = names.iter().map(String::as_str).collect();
    dataset.retain_columns(|_, name| !targets.contains(name))
}
