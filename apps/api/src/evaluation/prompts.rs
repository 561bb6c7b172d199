// Evaluation prompt template.
// Resume and JD text are embedded verbatim between triple-quote delimiters.

/// ATS evaluation prompt. Replace `{resume_text}` and `{job_description}` before sending.
pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"
You are an advanced ATS system with deep domain knowledge in tech hiring.

Evaluate this candidate resume against the job description.

Resume:
"""
{resume_text}
"""

Job Description:
"""
{job_description}
"""

Respond strictly in the following JSON format:
{
  "JD Match": "XX%",
  "MissingKeywords": ["keyword1", "keyword2", ...],
  "Profile Summary": "A 3-4 sentence summary of the candidate"
}
"#;

/// Fills the evaluation template.
///
/// Substitution happens in a single pass over the template, so placeholder-looking text
/// inside the resume is never re-expanded.
pub fn build_evaluation_prompt(resume_text: &str, job_description: &str) -> String {
    let (head, rest) = EVALUATION_PROMPT_TEMPLATE
        .split_once("{resume_text}")
        .unwrap_or((EVALUATION_PROMPT_TEMPLATE, ""));
    let (middle, tail) = rest.split_once("{job_description}").unwrap_or((rest, ""));

    let mut prompt =
        String::with_capacity(EVALUATION_PROMPT_TEMPLATE.len() + resume_text.len() + job_description.len());
    prompt.push_str(head);
    prompt.push_str(resume_text);
    prompt.push_str(middle);
    prompt.push_str(job_description);
    prompt.push_str(tail);
    prompt
}
