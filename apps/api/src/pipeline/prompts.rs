// All LLM prompt constants for the pipeline stages.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for keyword extraction. The response is consumed by naive
/// comma splitting, so the instruction pins the output to a single
/// comma-separated list.
pub const KEYWORDS_SYSTEM: &str =
    "Your task is to find and list all of the keywords and key skills that are present in \
    a job description using ATS standards. Respond with the keywords and key skills as a \
    single comma-separated list and write nothing else in your response.";

/// Keyword extraction user message. Replace `{jd_text}` before sending.
pub const KEYWORDS_USER_TEMPLATE: &str = "{jd_text}";

/// System prompt for the résumé filtering/rewriting stage.
/// `STRUCTURED_RESUME_CONTRACT` is appended at call time.
pub const REWRITE_SYSTEM: &str = "\
    Your task is to take a list of keywords and key skills and then look at my resume text \
    (which contains my key skills and my work experience) and remove anything from my resume \
    that does not match or have anything to do with the keywords and key skills. Write only \
    the skills and work experience that match the keywords and key skills from the job \
    description. If you see any ways to improve the wording in my resume to better match the \
    keywords and key skills in the job description, do so.";

/// Rewrite user message. Replace `{keywords}` and `{resume}` before sending.
pub const REWRITE_USER_TEMPLATE: &str = "keywords: {keywords}\n\nmy resume: {resume}";

/// System prompt for the match scoring/review stage. The score stays inside
/// prose; no structured score field is requested or parsed.
pub const REVIEW_SYSTEM: &str = "\
    Your task is to look at my resume and this job description and let me know how well my \
    resume matches the job description. Provide a score from 0 to 100, where 0 is a poor \
    match and 100 is a perfect match, with a brief explanation of why you gave this score. \
    Additionally, tell me which keywords and key skills from the job description are missing \
    from my resume and how I can improve my resume to better match the job description.";

/// Review user message. Replace `{jd_text}` and `{resume}` before sending.
pub const REVIEW_USER_TEMPLATE: &str = "job description: {jd_text}\n\nmy resume: {resume}";

/// Instruction block heading the hand-off prompt (no model call is made).
/// The assembled text is meant to be pasted into another model session.
pub const HANDOFF_INSTRUCTION: &str = "\
    Your task is to read my resume, a job description, a set of recommendations I received \
    for my resume regarding this job description, and a list of my experiences that are \
    currently not present in my resume. After reading these, write the relevant experiences \
    from my list of experiences into my resume in a way that makes sense and is easy for \
    recruiters to read and interpret. For each of the bullets that you add to the resume, \
    keep the same level of succinctness that is present in the bullets in the current \
    resume. Make sure to include the experiences in the correct sections and jobs of my \
    resume.";

/// System prompt for the experience integration stage.
/// `STRUCTURED_RESUME_CONTRACT` is appended at call time.
pub const INTEGRATE_SYSTEM: &str = "\
    Your task is to read my resume, a job description, and a list of my experiences that \
    are currently not present in my resume. After reading these, write the relevant \
    experiences from my list of experiences into my resume in a way that makes sense and is \
    easy for recruiters to read and interpret. For each of the bullets that you add to the \
    resume, keep the same level of succinctness that is present in the bullets in the \
    current resume. Make sure to include the experiences in the correct sections and jobs \
    of my resume.";

/// Integration user message. Replace `{jd_text}`, `{resume}`, and
/// `{experiences}` before sending.
pub const INTEGRATE_USER_TEMPLATE: &str =
    "job description: {jd_text}\n\nmy resume: {resume}\n\nexperiences not on resume: {experiences}";
