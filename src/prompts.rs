//! Prompt templates for website generation and modification.
//!
//! Both templates share the same output-format instructions: the model must
//! answer with exactly three fenced code blocks (html/css/javascript) and
//! nothing else. The service never parses those blocks itself.

const FORMAT_INSTRUCTIONS: &str = "Return only the HTML, CSS, and JavaScript code without any explanations.
Format the response exactly as:
```html
[HTML code here]
```
```css
[CSS code here]
```
```javascript
[JavaScript code here]
```
Make sure the code is complete, functional, and properly handles user interactions.
The JavaScript code should be properly scoped and not interfere with the parent window.";

/// Prompt for generating a website from scratch.
pub fn generation_prompt(description: &str) -> String {
    format!(
        "Create a website based on this description: {description}\n\n{FORMAT_INSTRUCTIONS}"
    )
}

/// Prompt for modifying an existing website. The current code is embedded
/// verbatim, no escaping; downstream rendering trusts the fenced-block
/// convention.
pub fn modification_prompt(modification: &str, html: &str, css: &str, js: &str) -> String {
    format!(
        "Modify this website according to this description: {modification}\n\n\
         Current HTML:\n```html\n{html}\n```\n\n\
         Current CSS:\n```css\n{css}\n```\n\n\
         Current JavaScript:\n```javascript\n{js}\n```\n\n\
         {FORMAT_INSTRUCTIONS}"
    )
}
