pub const QUIZ_GENERATION_PROMPT: &str = "Generate {num_questions} context-based multiple-choice quiz questions from the following news content:

{content}

Guidelines:

1. Question Structure:
    Each question must open with a brief context or background drawn from the news item.
    The question text must reference specific details from the news so it is engaging and informative.

Example 1:
    Title: Nobel laureates urge strong AI regulation
    Description: Physics Nobel Prize winner Geoffrey Hinton and chemistry laureate Demis Hassabis on Saturday insisted on a need for strong regulation of artificial intelligence, which played a key role in their awards. Hinton, who made headlines when he quit Google last year and warned of the dangers machines could one day outsmart people, was awarded his Nobel along with American John Hopfield for work on artificial neural networks.

    Question:
    Nobel laureates Geoffrey Hinton and Demis Hassabis emphasize strong AI regulation. Geoffrey Hinton, who warned about AI surpassing human intelligence, was awarded the Nobel Prize for his work on which AI-related technology?

Example 2:
    Title: Advanced AI chips cleared for export to UAE under Microsoft deal
    Description: The US government has authorised the export of advanced artificial intelligence chips to a Microsoft-operated facility in the United Arab Emirates. This approval is part of Microsoft's closely scrutinized partnership with the Emirati AI company G42.

    Question:
    The US has approved the export of advanced AI chips to a Microsoft-operated facility in the UAE. This deal is part of a collaboration with which Emirati AI company?

Example 3:
    Title: Banks to use AI & machine learning to safeguard customers from financial frauds
    Description: In a significant move to address the growing menace of digital financial frauds, the Department of Financial Services (DFS) has directed banks to adopt advanced technologies, including artificial intelligence (AI) and machine learning (ML), to safeguard customers from fraudsters.

    Question:
    The Department of Financial Services (DFS) recently instructed banks to use AI and machine learning technologies to combat which pressing issue in the financial sector?

Follow the question-forming method shown in these examples.

2. Answer Options:
    Provide four distinct options with exactly one correct answer.
    Incorrect options must be plausible but clearly distinguishable from the correct answer.

    Example Options:
    - Advanced robotics
    - Artificial neural networks
    - Quantum computing
    - Machine learning frameworks

3. Correct Answer:
    Mark the correct answer explicitly using the `correct` flag.

4. News Context:
    Include a short `news_context` for each question that summarizes the relevant news item.

5. Variety:
    Cover different aspects of the content so the questions span a range of topics and perspectives.

- Questions should be elaborate and include relevant background or situational details from the news.
- Respond in JSON only.

{format_instructions}";

pub const FORMAT_INSTRUCTIONS_PREAMBLE: &str = "The output should be formatted as a JSON instance that conforms to the JSON schema below.

As an example, for the schema {\"properties\": {\"foo\": {\"title\": \"Foo\", \"description\": \"a list of strings\", \"type\": \"array\", \"items\": {\"type\": \"string\"}}}, \"required\": [\"foo\"]}
the object {\"foo\": [\"bar\", \"baz\"]} is a well-formatted instance of the schema. The object {\"properties\": {\"foo\": [\"bar\", \"baz\"]}} is not well-formatted.

Here is the output schema:";
