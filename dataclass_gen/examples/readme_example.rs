//! Example matching the README: one model with explicit decorator arguments,
//! rendered alone and as part of a module.
//! See [README](../../README.md).
//!
//! Contains only the model definitions; generated Python is written to stdout.

use dataclass_gen::{DataClass, DataModelField, DataclassArguments, Reference, Types};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let model: DataClass = DataClass::new(
        Reference::new("Pet", "Pet"),
        vec![
            DataModelField::new("name", Types::String, true),
            DataModelField::new("age", Types::Integer, false),
        ],
    )
    .with_dataclass_arguments(DataclassArguments::new().with("slots", true));

    print!("{}", model.render());

    println!();
    let mut stdout: io::Stdout = io::stdout();
    dataclass_gen::generate_module_to_writer(&[model], &mut stdout)?;
    Ok(())
}
