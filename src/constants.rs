/// Stage a tender enters once a bid has been submitted; its amounts count as reserved budget
pub const STAGE_SUBMITTED: &str = "Подал ИП";

/// Stages between winning and final payment; their amounts count as spent budget,
/// in pipeline order
pub const EXECUTION_STAGES: [&str; 5] = [
    "Победил ИП",
    "Подписание контракта",
    "Исполнение",
    "Ожидание оплаты",
    "Исполнен",
];

/// Row color tokens; purely presentational
pub const COLOR_PALETTE: [&str; 6] = ["red", "orange", "yellow", "green", "blue", "gray"];
