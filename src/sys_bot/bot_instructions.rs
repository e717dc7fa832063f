use crate::sys_resource::read_resource;

const DEFAULT_INSTRUCTIONS: &str =
    "You are a course assistant. Answer briefly and politely in Mongolian. \
     If you do not know something, ask the user to leave a phone number.";

/// Reads the fallback system instructions, relative to the executable's
/// directory. Falls back to a built-in prompt if the file is missing or empty.
pub fn get_instructions(instruction_path: &str) -> String {
    match read_resource(instruction_path) {
        Ok(content) if !content.trim().is_empty() => content.trim().to_string(),
        Ok(_) => {
            log::warn!("Instructions file {} is empty, using default", instruction_path);
            DEFAULT_INSTRUCTIONS.to_string()
        }
        Err(err) => {
            log::warn!(
                "Instructions file {} not readable ({}), using default",
                instruction_path,
                err
            );
            DEFAULT_INSTRUCTIONS.to_string()
        }
    }
}
