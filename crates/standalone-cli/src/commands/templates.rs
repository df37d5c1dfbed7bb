//! Source templates for scaffolded components.

/// Convert a kebab- or snake-case component name into a PascalCase
/// identifier suitable for a Svelte component file.
pub fn pascal_case(name: &str) -> String {
    name.split(['-', '_', ' '])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// The entry module mounting the component into the host page.
pub fn entry_module(name: &str) -> String {
    let pascal = pascal_case(name);
    format!(
        "import {pascal} from './{pascal}.svelte';\n\
         \n\
         const target = document.getElementById('{name}') ?? document.body;\n\
         \n\
         export default new {pascal}({{ target }});\n"
    )
}

/// A starter Svelte component with a scoped class matching the component
/// name.
pub fn svelte_component(name: &str) -> String {
    format!(
        "<script lang=\"ts\">\n\
         \tlet name = '{name}';\n\
         </script>\n\
         \n\
         <div class=\"{name}\">Hello from {{name}}!</div>\n\
         \n\
         <style>\n\
         \t.{name} {{\n\
         \t\tfont-family: sans-serif;\n\
         \t}}\n\
         </style>\n"
    )
}
