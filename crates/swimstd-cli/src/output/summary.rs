use swimstd_core::model::{Document, Gender};

const GENDERS: [Gender; 2] = [Gender::Girls, Gender::Boys];

pub fn print(doc: &Document) {
    println!("{}", doc.title);
    println!("  source: {}", doc.source_url);
    println!("  generated on: {}\n", doc.generated_on);

    if doc.age_groups.is_empty() {
        println!("  no age groups found");
        return;
    }

    let width = age_width(doc);

    print!("  {:<width$}", "Age");
    for gender in GENDERS {
        print!("  {:>6}", gender.to_string());
    }
    println!();

    for group in &doc.age_groups {
        print!("  {:<width$}", group.age);
        for gender in GENDERS {
            print!("  {:>6}", group.genders.get(gender).events.len());
        }
        println!();
    }
}

/// Width of the age column in characters.
fn age_width(doc: &Document) -> usize {
    doc.age_groups
        .iter()
        .map(|g| g.age.chars().count())
        .max()
        .unwrap_or(0)
        .max("Age".len())
}
