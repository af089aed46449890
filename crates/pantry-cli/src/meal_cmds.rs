//! Handlers for `pantry add` and `pantry show`.
//!
//! Both commands work fully flag-driven or fully interactive: missing
//! values are prompted for, re-asking on every validation failure the way
//! the menu session does.

use anyhow::{Result, bail};

use pantry_core::catalog::{Catalog, CatalogError};
use pantry_core::io::LineIo;
use pantry_core::validate::{self, ValidationError};
use pantry_db::models::Category;

// -----------------------------------------------------------------------
// pantry add
// -----------------------------------------------------------------------

/// Add a meal to the catalog.
///
/// With `--category`, `--name`, and `--ingredients` all present the command
/// runs non-interactively and fails on the first invalid value. Otherwise
/// missing pieces are prompted for with unbounded re-asking.
pub async fn cmd_add(
    catalog: &mut Catalog,
    io: &mut dyn LineIo,
    category: Option<String>,
    name: Option<String>,
    ingredients: Option<String>,
) -> Result<()> {
    let interactive = category.is_none() || name.is_none() || ingredients.is_none();

    let category = match category {
        Some(s) => {
            let s = s.trim().to_lowercase();
            match s.parse::<Category>() {
                Ok(c) => c,
                Err(_) => bail!("{}", ValidationError::InvalidCategory(s)),
            }
        }
        None => prompt_category(io, "Which meal do you want to add (breakfast, lunch, dinner)?")?,
    };

    let name = match name {
        Some(s) => {
            let s = s.trim().to_lowercase();
            if !validate::is_valid_token(&s) {
                bail!("{}", ValidationError::InvalidName(s));
            }
            s
        }
        None => {
            io.write_line("Input the meal's name:")?;
            loop {
                let entered = io.read_line()?.trim().to_lowercase();
                if validate::is_valid_token(&entered) {
                    break entered;
                }
                io.write_line("Wrong format. Use letters only!")?;
            }
        }
    };

    let ingredients = match ingredients {
        Some(s) => validate::parse_ingredient_list(s.trim().to_lowercase().as_str())?,
        None => {
            io.write_line("Input the ingredients:")?;
            loop {
                let entered = io.read_line()?.trim().to_lowercase();
                match validate::parse_ingredient_list(&entered) {
                    Ok(list) => break list,
                    Err(_) => io.write_line("Wrong format. Use letters only!")?,
                }
            }
        }
    };

    match catalog.add(category, &name, ingredients).await {
        Ok(_) => {
            io.write_line("The meal has been added!")?;
            Ok(())
        }
        // In interactive mode a duplicate is reported, not fatal.
        Err(CatalogError::Validation(e)) if interactive => {
            io.write_line(&e.to_string())?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

// -----------------------------------------------------------------------
// pantry show
// -----------------------------------------------------------------------

/// Print every meal of one category, alphabetical by name.
pub async fn cmd_show(
    catalog: &Catalog,
    io: &mut dyn LineIo,
    category: Option<String>,
) -> Result<()> {
    let category = match category {
        Some(s) => {
            let s = s.trim().to_lowercase();
            match s.parse::<Category>() {
                Ok(c) => c,
                Err(_) => bail!("{}", ValidationError::InvalidCategory(s)),
            }
        }
        None => prompt_category(io, "Which category do you want to print (breakfast, lunch, dinner)?")?,
    };

    let meals = catalog.list_by_category(category);
    if meals.is_empty() {
        io.write_line("No meals found.")?;
        return Ok(());
    }

    io.write_line(&format!("Category: {category}"))?;
    io.write_line("")?;
    for meal in meals {
        io.write_line(&format!("Name: {}", meal.name))?;
        io.write_line("Ingredients:")?;
        for ingredient in &meal.ingredients {
            io.write_line(ingredient)?;
        }
        io.write_line("")?;
    }

    Ok(())
}

// -----------------------------------------------------------------------
// Shared prompts
// -----------------------------------------------------------------------

/// Ask for a category until a valid one is entered.
fn prompt_category(io: &mut dyn LineIo, question: &str) -> Result<Category> {
    io.write_line(question)?;
    loop {
        let entered = io.read_line()?.trim().to_lowercase();
        match entered.parse::<Category>() {
            Ok(category) => return Ok(category),
            Err(_) => {
                io.write_line("Wrong meal category! Choose from: breakfast, lunch, dinner.")?
            }
        }
    }
}
