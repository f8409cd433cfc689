use lessongen_core::Difficulty;

/// Section headings the model is told to produce, in order.
/// The second one is followed by the difficulty annotation.
pub const SECTION_TITLES: [&str; 3] = ["개념 설명", "연습 문제", "연습 문제 해설"];

/// Render the system instruction for one request.
pub fn system_instruction(difficulty: Difficulty) -> String {
    let mut prompt = String::new();
    prompt.push_str(
        "당신은 교사의 요청을 분석하여 맞춤형 학습 자료(개념 설명, 연습 문제, 연습 문제 해설)를 \
         생성하는 AI입니다.\n",
    );
    prompt.push_str("반드시 학습과 관련된 요청에만 답변하세요.\n");
    prompt.push_str("요청에 따라 아래와 같이 답변을 구성하세요:\n");
    prompt.push_str(&format!("1. {}\n", SECTION_TITLES[0]));
    prompt.push_str(&format!(
        "2. {}({} 난이도)\n",
        SECTION_TITLES[1],
        difficulty.label()
    ));
    prompt.push_str(&format!("3. {}\n", SECTION_TITLES[2]));
    prompt
}
