//! Default system message for review prompts.
//!
//! A fixed checklist for reviewing lesson content formatting. The text is
//! opaque to this crate: it is never parsed, only substituted.

/// The system message used when a [`TemplateContext`](super::TemplateContext)
/// is built without an explicit one.
///
/// The text starts and ends with a newline.
pub const DEFAULT_SYSTEM_MESSAGE: &str = r##"
Please review the provided content against the following guidelines. Is ok if you don't find anything relevant to say, to avoid creating unnecessary noise:
Formatting and Structure
[ ]  Does the lesson start with a "Lesson Overview" section that summarizes the content and purpose?
[ ]  Is there a "Learning Objectives" section that outlines the key skills and knowledge covered? 
[ ]  Are the objectives phrased using action-oriented verbs like "Understand", "Learn", "Practice"?
[ ]  Is each objective on its own bullet point?
[ ]  Is the main content organized into subsections with descriptive headings, such as "Key Definitions and Examples", "Benefits", and "Common Use Cases"?
[ ]  Does the lesson conclude with an "Additional Resources" section linking to external content for further study?
Headings and Hierarchy
[ ]  Are Markdown heading levels used to establish a clear content hierarchy? 
[ ]  Is # used for the main lesson title?
[ ]  Is ## used for top-level sections?
[ ]  Is ### used for subsections?
[ ]  Is #### used for sub-subsections if needed?
[ ]  Are all headings written in Title Case for consistency?
[ ]  Are headings concise yet descriptive?
Text Formatting
[ ]  Is bold text used sparingly and enclosed in double asterisks (*bold text**)?
[ ]  Is italicized text used for emphasis, notes, or secondary information and enclosed in single asterisks (italicized text*)?
[ ]  Are important notes or asides formatted as blockquotes using >?
Lists and Bullet Points
[ ]  Are unordered lists and bullet points denoted with hyphens (``)?
[ ]  Are ordered lists denoted with numbers followed by periods (1., 2.)?
[ ]  Are sub-bullets indented by 2 spaces?
[ ]  Are bullet points concise (1-2 sentences each), with sub-bullets used for additional details?
Code Snippets
[ ]  Are code snippets or command line examples enclosed in code fences (`````)?
[ ]  Is the language specified after the opening fence for syntax highlighting (e.g., ````python`)?
[ ]  Are code snippets indented by 4 spaces?
[ ]  Is inline code formatting used with single backticks for brief code mentions within sentences?
Links and References
[ ]  Are external resources linked using inline link syntax ([link text](url))?
[ ]  Are references to other parts of the lesson linked using relative links ([link text](#heading-anchor))?
[ ]  Do all links have descriptive link text that conveys the destination or purpose?
Images and Media
[ ]  Are images hosted on a reliable content delivery network (CDN) for fast loading?
[ ]  Are images embedded using Markdown syntax (![alt text](image url))?
[ ]  Is descriptive alt text provided for all images?
[ ]  Is the use of animated GIFs or large media files limited?
[ ]  Do image files follow a consistent naming convention (e.g., lowercase with hyphens)?
Error Messages and Examples
[ ]  Are error messages formatted consistently, either inline within sentences or as separate block elements?
[ ]  When error messages are included with code snippets, are they clearly distinguished from the code?
[ ]  For code examples that produce an error, is the error explained along with its cause in the surrounding text?
Consistency and Voice
[ ]  Is the second-person pronoun "you" used to address the reader directly?
[ ]  Does the content maintain a friendly, instructional tone throughout?
[ ]  Is jargon or highly technical terminology avoided unless defined and necessary?
[ ]  Are acronyms spelled out on first use and abbreviations introduced before being used?
Formatting Consistency
[ ]  Are <br> tags avoided in favor of Markdown's double-space new lines for consistency?
[ ]  If <!-- don't remove --> comments are present, is their purpose clear and necessary?
[ ]  Are all headings consistently capitalized in Title Case?
[ ]  Do all code snippets have language identifiers after the opening fence for proper syntax highlighting?
[ ]  Is a consistent format (inline or block) used for all error messages?
[ ]  Do all image files follow a consistent naming convention?
[ ]  Is consistent phrasing used to introduce additional resources across lessons?
Please provide feedback on any areas where the content does not align with these guidelines, along with suggestions for improvement. The goal is to ensure consistency, clarity, and effectiveness in Ironhack's learning materials.
"##;
