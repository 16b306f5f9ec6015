mod print_patch_to_stdout;
mod write_patch_with_crlf_line_endings;
mod label_headers;
mod patch_random_content;
