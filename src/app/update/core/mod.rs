mod reducer;
mod runtime;
