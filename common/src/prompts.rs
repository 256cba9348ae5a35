//! AI法規顧問のプロンプトと表示文言

/// ユーザー質問の前に付ける固定プレフィックス
pub const QUESTION_PREFIX: &str =
    "你是一位專精於台北市容積代金估價的資深估價師。請依據 113 年修正版範本回答：";

/// システム指示
pub const SYSTEM_INSTRUCTION: &str = "回答請保持專業、精確，並指出具體範本頁碼或條款。如果是關於地下室、銷坪比或開挖率，請特別強調 113 年的新舊差異。";

/// 問い合わせ中の表示
pub const PENDING_MESSAGE: &str = "正在查詢 113 年最新規範...";

/// 空の応答
pub const EMPTY_RESULT_MESSAGE: &str = "無結果";

/// 失敗時の表示（詳細は出さない）
pub const FAILURE_MESSAGE: &str = "連線失敗，請檢查網路。";

/// 未使用時のヒント
pub const IDLE_HINT: &str = "隨時點擊上方按鈕或在下方輸入問題諮詢 AI...";

/// プリセット質問 (ボタン表示, 質問文)
pub const PRESET_QUESTIONS: &[(&str, &str)] = &[
    ("開挖率變動規則", "請列出113年版關於地下室開挖率變動的審議規則"),
    ("利潤率取值標準", "容積代金評估時，土地開發分析法的利潤率取值標準？"),
    ("案例屋齡例外處理", "比較案例如果找不到3年內新成屋，該如何處理？"),
];

/// 送信するユーザー本文
pub fn build_question_prompt(question: &str) -> String {
    format!("{QUESTION_PREFIX}{question}")
}
