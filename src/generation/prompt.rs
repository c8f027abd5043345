// ABOUTME: Prompt template and response schema for recipe generation
// ABOUTME: Template is loaded at compile time from a markdown file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioCozinha

use serde_json::{json, Value};

/// Prompt asking for three new recipes, with `{category_name}` and
/// `{category_description}` placeholders
pub const MORE_RECIPES_TEMPLATE: &str = include_str!("prompts/more_recipes.md");

/// Persona sent ahead of the generation prompt
pub const NUTRITIONIST_PERSONA: &str = "Você é um nutricionista funcional.";

const CATEGORY_NAME: &str = "{category_name}";
const CATEGORY_DESCRIPTION: &str = "{category_description}";

/// Render the generation prompt for one subcategory.
///
/// Placeholders are filled in a single pass over the template, so text
/// inside a substituted value is never expanded again.
#[must_use]
pub fn more_recipes_prompt(category_name: &str, category_description: &str) -> String {
    let mut rendered = String::with_capacity(MORE_RECIPES_TEMPLATE.len() + 128);
    let mut rest = MORE_RECIPES_TEMPLATE;

    while let Some(start) = rest.find('{') {
        rendered.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix(CATEGORY_NAME) {
            rendered.push_str(category_name);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(CATEGORY_DESCRIPTION) {
            rendered.push_str(category_description);
            rest = after;
        } else {
            rendered.push('{');
            rest = &tail[1..];
        }
    }
    rendered.push_str(rest);
    rendered
}

/// Response schema in Gemini's OpenAPI subset: an array of recipe objects,
/// every field required except `chefTip`
#[must_use]
pub fn recipe_array_schema() -> Value {
    let string = json!({ "type": "STRING" });
    let string_array = json!({ "type": "ARRAY", "items": { "type": "STRING" } });

    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": string,
                "name": string,
                "time": string,
                "difficulty": string,
                "functionalAction": string,
                "ingredients": string_array,
                "steps": string_array,
                "chefTip": string,
                "category": string
            },
            "required": [
                "id",
                "name",
                "time",
                "difficulty",
                "functionalAction",
                "ingredients",
                "steps",
                "category"
            ]
        }
    })
}
