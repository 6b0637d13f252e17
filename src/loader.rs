use crate::error::SimError;

/// Parse assembler output: one decimal word per line, line number is the address.
pub fn parse_machine_code(text: &str) -> Result<Vec<i32>, SimError> {
    text.lines()
        .enumerate()
        .map(|(address, line)| {
            line.trim()
                .parse::<i32>()
                .map_err(|_| SimError::MalformedLine {
                    address,
                    line: line.to_string(),
                })
        })
        .collect()
}
