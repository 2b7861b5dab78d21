use snake_common::games::snake::{Direction, EngineCommand, SnakeId};

/// Parses one line of driver input, e.g. `player up`, `b left`, `pause`.
pub fn parse_command(line: &str) -> Result<EngineCommand, String> {
    let words: Vec<String> = line.split_whitespace().map(|w| w.to_ascii_lowercase()).collect();

    match words.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [who, dir] => {
            let id = parse_snake(who)?;
            let direction = parse_direction(dir)?;
            Ok(EngineCommand::Turn(id, direction))
        }
        ["pause"] => Ok(EngineCommand::Pause),
        ["resume"] => Ok(EngineCommand::Resume),
        ["toggle"] | ["space"] => Ok(EngineCommand::TogglePause),
        ["restart"] | ["r"] => Ok(EngineCommand::Restart),
        ["reset-stats"] | ["reset"] => Ok(EngineCommand::ResetStats),
        ["quit"] | ["exit"] | ["q"] => Ok(EngineCommand::Shutdown),
        [] => Err("Empty command".to_string()),
        _ => Err(format!("Unknown command: {}", line.trim())),
    }
}

fn parse_snake(word: &str) -> Result<SnakeId, String> {
    match word {
        "player" | "p" => Ok(SnakeId::Player),
        "bot" | "b" => Ok(SnakeId::Bot),
        _ => Err(format!("Unknown snake: {}", word)),
    }
}

fn parse_direction(word: &str) -> Result<Direction, String> {
    match word {
        "up" | "u" => Ok(Direction::Up),
        "down" | "d" => Ok(Direction::Down),
        "left" | "l" => Ok(Direction::Left),
        "right" | "r" => Ok(Direction::Right),
        _ => Err(format!("Unknown direction: {}", word)),
    }
}
