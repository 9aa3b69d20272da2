// Each builder returns one statement without its trailing newline.
pub(crate) fn counter_increment(objective: &str, amount: i64) -> String {
    format!("scoreboard players add @s {} {}", objective, amount)
}

pub(crate) fn gated_tellraw(
    objective: &str,
    threshold: i64,
    content_prefix: &str,
    content: &str,
) -> String {
    format!(
        "execute if score @s {} matches {} run tellraw @a [{}, {{\"text\":{}, \"italic\": true, \"color\":\"gray\", \"bold\": \"false\"}}]",
        objective,
        threshold,
        content_prefix,
        json_string(content)
    )
}

pub(crate) fn reset_after(objective: &str, threshold: i64) -> String {
    format!(
        "execute if score @s {} matches {}.. run scoreboard players set @s {} -1",
        objective, threshold, objective
    )
}

fn json_string(value: &str) -> String {
    serde_json::to_string(value).expect("string json")
}
