use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct WordData {
    blacklist: Vec<String>,
    male_words: Vec<String>,
    female_words: Vec<String>,
}

#[derive(Deserialize)]
struct CountryData {
    dictionary_columns: Vec<String>,
    dictionary_regions: HashMap<String, Vec<String>>,
    inverse_order: Vec<String>,
    dutch_sphere: Vec<String>,
}

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() -> Result<()> {
    let input = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let output = PathBuf::from(env::var("OUT_DIR")?);

    let json = read_file(&input, "build/word_data.json")?;
    let words: WordData = serde_json::from_str(&json)?;
    write_set(&output.join("blacklist.rs"), &words.blacklist)?;
    write_set(&output.join("male_words.rs"), &words.male_words)?;
    write_set(&output.join("female_words.rs"), &words.female_words)?;

    let json = read_file(&input, "build/country_data.json")?;
    let countries: CountryData = serde_json::from_str(&json)?;
    let column_by_country = countries
        .dictionary_columns
        .iter()
        .enumerate()
        .map(|(i, c)| (c.clone(), i))
        .collect::<HashMap<_, _>>();
    write_map(
        &output.join("column_by_country.rs"),
        &column_by_country,
        |v| v.to_string(),
    )?;
    let region_by_country = countries
        .dictionary_regions
        .iter()
        .flat_map(|(region, members)| members.iter().map(move |m| (m.clone(), region.clone())))
        .collect::<HashMap<_, _>>();
    write_map(
        &output.join("region_by_country.rs"),
        &region_by_country,
        |v| format!("\"{}\"", v),
    )?;
    write_set(&output.join("inverse_order.rs"), &countries.inverse_order)?;
    write_set(&output.join("dutch_sphere.rs"), &countries.dutch_sphere)?;

    Ok(())
}

fn write_map<'a, K, V, F>(output: &Path, map: &'a HashMap<K, V>, transform: F) -> Result<()>
where
    K: std::ops::Deref<Target = str>,
    F: Fn(&'a V) -> String,
{
    let mut builder = phf_codegen::Map::new();
    for (k, v) in map {
        builder.entry(k.to_string(), &transform(v));
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn write_set(output: &Path, set: &[String]) -> Result<()> {
    let mut builder = phf_codegen::Set::new();
    for v in set {
        builder.entry(v.as_str());
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn read_file(input_dir: &Path, file_path: &str) -> Result<String> {
    println!("cargo:rerun-if-changed={}", file_path);
    let s = fs::read_to_string(input_dir.join(file_path))?;
    Ok(s)
}
