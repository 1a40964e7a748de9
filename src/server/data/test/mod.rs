mod highscore;
mod submission;
